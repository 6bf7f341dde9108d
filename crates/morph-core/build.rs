// File: crates/morph-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager pulls in for the raster renderer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's FontMgr reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}

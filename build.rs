use fs_extra::dir::{copy, CopyOptions};
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

fn main() -> Result<(), Box<dyn Error>> {
    // Rerun on asset changes
    println!("cargo:rerun-if-changed=assets");

    // Copy assets into target/<profile> so relative asset paths resolve next to the binary
    let target_dir = compute_target_dir()?;
    copy_assets(&target_dir)?;

    Ok(())
}

fn compute_target_dir() -> Result<PathBuf, Box<dyn Error>> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let profile = std::env::var("PROFILE")?;
    let base = std::env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| manifest_dir.join("target"));
    Ok(base.join(profile))
}

fn copy_assets(target_dir: &Path) -> Result<(), Box<dyn Error>> {
    if fs::metadata("assets").is_ok() {
        fs::create_dir_all(target_dir)?;
        let mut options = CopyOptions::new();
        options.overwrite = true;
        // copy_inside=false copies the `assets` directory itself into `target_dir`.
        copy("assets", target_dir, &options)?;
        println!(
            "cargo:warning=Copied assets to {}",
            target_dir.join("assets").display()
        );
    }
    Ok(())
}

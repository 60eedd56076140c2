// Stages the static demo site into `dist/` so it can be deployed as is.
use std::path::Path;

use fs_extra::dir::{self, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        let _ = std::fs::remove_dir_all(out_dir);
    }
    if let Err(err) = std::fs::create_dir_all(out_dir) {
        println!("cargo:warning=cannot create dist/: {err}");
        return;
    }

    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(err) = dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {err}");
    }
}

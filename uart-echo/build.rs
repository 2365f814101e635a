// build.rs
use std::{env, fs, path::PathBuf};

fn main() {
    // Put the memory layout somewhere the linker can find it; link.x
    // comes from riscv-rt and pulls memory.x in.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg=-Tlink.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

// build.rs

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TCURSES_LIB");

    // An explicit library name skips probing entirely.
    if let Ok(lib) = std::env::var("TCURSES_LIB") {
        println!("cargo:rustc-link-lib={}", lib);
        return;
    }

    // Prefer the wide-character build
    for lib in &["ncursesw", "ncurses"] {
        match pkg_config::probe_library(lib) {
            Ok(_) => return,
            Err(e) => eprintln!("pkg-config failed for library '{}': {}", lib, e),
        }
    }

    // --- Manual Linking Fallback ---
    // Assumes the library lives in a standard search path.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "macos" {
        println!("cargo:rustc-link-lib=ncurses");
    } else {
        println!("cargo:rustc-link-lib=ncursesw");
        // Split builds keep the terminfo layer in its own library.
        println!("cargo:rustc-link-lib=tinfo");
    }

    eprintln!("Manual linking flags applied. Ensure the ncurses development library is installed.");
}

#[allow(dead_code)]
mod database;
#[allow(dead_code)]
mod error;

use std::env;
use std::fs;
use std::path::PathBuf;

use database::RuleSet;

/// The database shipped with the converter.
const PATH_DATABASE: &str = "src/database/convdb.dat";

/// The name the converter looks for next to its executable.
const FILENAME_DATABASE: &str = "convdb.dat";

/// Validates the bundled database and installs it next to the binary.
fn main() {
    // Track changes in the database.
    println!("cargo:rerun-if-changed={}", PATH_DATABASE);

    // Prevent compilation of build-only code in the final binary.
    println!("cargo:rustc-check-cfg=cfg(mainbuild)");
    println!("cargo:rustc-cfg=mainbuild");

    if let Err(error) = RuleSet::load(PATH_DATABASE) {
        eprintln!();
        eprintln!("Error parsing database file:");
        match error.number_line() {
            Some(number_line) => eprintln!("{}:{}: {}", PATH_DATABASE, number_line, error),
            None => eprintln!("{}: {}", PATH_DATABASE, error),
        }
        eprintln!();

        panic!("Error parsing database file");
    }

    // OUT_DIR is <target>/<profile>/build/<package>-<hash>/out; the binary
    // lands in <target>/<profile>.
    let path_output = PathBuf::from(env::var("OUT_DIR").unwrap());
    let directory_profile = path_output.ancestors().nth(3).unwrap();

    fs::copy(PATH_DATABASE, directory_profile.join(FILENAME_DATABASE)).unwrap();
}

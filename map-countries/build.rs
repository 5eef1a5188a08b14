use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the sample population CSV to OUT_DIR for include_str
    let sample_src = Path::new("../fixtures/population.csv");
    if sample_src.exists() {
        fs::copy(sample_src, Path::new(&out_dir).join("population.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("population.csv"),
            "Entity,Code,Year,Population - Sex: all - Age: all - Variant: estimates\nFrance,FRA,1950,41829176\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=../fixtures/population.csv");
}

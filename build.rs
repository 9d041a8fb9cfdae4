use clap::CommandFactory;
use clap_complete::{
    generate_to,
    shells::{Bash, Zsh},
};
use std::{env, fs, io::Error, path::Path};

include!("./src/options.rs");

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/options.rs");

    let directory = match env::var_os("CARGO_MANIFEST_DIR") {
        Some(manifest) => Path::new(&manifest).join("completions"),
        None => return Ok(()),
    };
    fs::create_dir_all(&directory)?;

    let command = &mut Options::command();
    let name = command.get_name().to_string();

    for path in [
        generate_to(Bash, command, &name, &directory)?,
        generate_to(Zsh, command, &name, &directory)?,
    ] {
        println!("cargo:info=Generated {:?}", path);
    }

    Ok(())
}

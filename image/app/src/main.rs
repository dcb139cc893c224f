/*++

Licensed under the Apache-2.0 license.

File Name:

   main.rs

Abstract:

    Main entry point of the Chain of Trust imaging application

--*/
use std::path::PathBuf;

use clap::{arg, value_parser, Command};

mod create;

/// Entry point
fn main() -> anyhow::Result<()> {
    let sub_cmds = vec![
        Command::new("create-cert")
            .about("Create a signed Chain of Trust certificate")
            .arg(
                arg!(--"config" <FILE> "Certificate configuration file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"out" <FILE> "Output file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            ),
        Command::new("create-container")
            .about("Wrap a firmware payload in a container")
            .arg(
                arg!(--"payload" <FILE> "Firmware payload")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"svn" <U32> "Security Version Number")
                    .required(true)
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                arg!(--"out" <FILE> "Output file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            ),
    ];

    let cmd = Command::new("cot-image-app")
        .arg_required_else_help(true)
        .subcommands(sub_cmds)
        .about("Chain of Trust imaging tools")
        .get_matches();

    match cmd.subcommand() {
        Some(("create-cert", args)) => create::run_cert_cmd(args),
        Some(("create-container", args)) => create::run_container_cmd(args),
        _ => unreachable!(),
    }
}

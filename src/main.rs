use b58uuid::{decode, encode_uuid, format_uuid, generate};
use clap::{Parser, Subcommand};
use log::{error, LevelFilter};
use std::process;

#[derive(Debug, Parser)]
#[command(name = "b58uuid", version, about = "Base58 UUIDs (22 characters, Bitcoin alphabet)")]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print fresh random v4 UUIDs in Base58")]
    Generate {
        #[arg(short = 'n', long, default_value_t = 1, help = "How many to print")]
        count: usize,
    },
    #[command(about = "Encode a hex UUID (hyphens optional) to Base58")]
    Encode {
        #[arg(help = "UUID, e.g. 550e8400-e29b-41d4-a716-446655440000")]
        uuid: String,
    },
    #[command(about = "Decode a Base58 UUID to its hyphenated form")]
    Decode {
        #[arg(help = "22-character Base58 string")]
        b58: String,
        #[arg(long, help = "Print 32 bare hex digits instead")]
        raw: bool,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let opt = Opt::parse();
    if let Err(e) = run_command(opt.command) {
        error!("{e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> b58uuid::Result<()> {
    match command {
        Command::Generate { count } => {
            for _ in 0..count {
                println!("{}", generate());
            }
        }
        Command::Encode { uuid } => println!("{}", encode_uuid(&uuid)?),
        Command::Decode { b58, raw } => {
            let bytes = decode(&b58)?;
            if raw {
                println!("{}", hex::encode(bytes));
            } else {
                println!("{}", format_uuid(&bytes));
            }
        }
    }
    Ok(())
}

//! Share Token CLI
//!
//! Encode, decode, and link range share tokens from the command line.
//! Single ranges ride whitespace-separated hand identifiers, collections
//! ride JSON on the way in and out.

use clap::Parser;
use rangelink::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Share {
    #[command(
        about = "Encode hand identifiers into a range share token",
        alias = "enc"
    )]
    Encode {
        #[arg(required = true)]
        hands: Vec<String>,
    },
    #[command(
        about = "Decode a range share token into hand identifiers",
        alias = "dec"
    )]
    Decode {
        #[arg(required = true)]
        token: String,
    },
    #[command(about = "Pack a JSON collection of named ranges into a share token")]
    Pack {
        #[arg(required = true, help = "path to a JSON collection, or - for stdin")]
        path: String,
        #[arg(long, requires = "name", help = "emit a full share link instead of the bare token")]
        origin: Option<String>,
        #[arg(long, requires = "origin", help = "link name to slug into the share path")]
        name: Option<String>,
    },
    #[command(about = "Unpack a collection share token back into JSON")]
    Unpack {
        #[arg(required = true)]
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    match Share::parse() {
        Share::Encode { hands } => {
            let range = Range::try_from(hands.join(" ").as_str())?;
            log::info!("{} hands cover {:.1}% of deals", range.size(), range.percent());
            println!("{}", codec::encode_range(&range));
        }
        Share::Decode { token } => {
            println!("{}", codec::decode_range(&token)?);
        }
        Share::Pack { path, origin, name } => {
            let collection = serde_json::from_str::<Collection>(&read(&path)?)?;
            log::info!("packing {} named ranges", collection.len());
            match (origin, name) {
                (Some(origin), Some(name)) => match share::slug(&name).is_empty() {
                    true => return Err(anyhow::anyhow!("name flattens to an empty slug")),
                    false => println!("{}", share::collection_url(&origin, &name, &collection)?),
                },
                _ => println!("{}", codec::encode_collection(&collection)?),
            }
        }
        Share::Unpack { token } => {
            let collection = codec::decode_collection(&token)?;
            println!("{}", serde_json::to_string_pretty(&collection)?);
        }
    }
    Ok(())
}

fn read(path: &str) -> anyhow::Result<String> {
    let mut buffer = String::new();
    match path {
        "-" => std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?,
        _ => std::io::Read::read_to_string(&mut std::fs::File::open(path)?, &mut buffer)?,
    };
    Ok(buffer)
}

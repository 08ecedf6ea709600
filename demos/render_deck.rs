//! Renders a full deck of card faces to PNG files.
//!
//! Usage: `render_deck <atlas-dir> <out-dir> [screen-width]`
//!
//! The atlas directory must contain the PNG resources named by
//! `AtlasId::file_name` (`suits.png`, `medredfont.png`, ...).

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::fs;
use std::process::ExitCode;

use solrs::{CardSize, Deck, DirResources, ProfileKind, Rank, RenderCache, SizeProfile, Suit};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (Some(atlas_dir), Some(out_dir)) = (args.next(), args.next()) else {
        eprintln!("usage: render_deck <atlas-dir> <out-dir> [screen-width]");
        return ExitCode::FAILURE;
    };
    let screen_width = args.next().and_then(|v| v.parse().ok()).unwrap_or(495);

    let resources = DirResources::new(&atlas_dir);
    let card = CardSize::for_screen(screen_width);
    println!("card size: {}x{}", card.width, card.height);

    for kind in [ProfileKind::Normal, ProfileKind::Large] {
        let cache = match RenderCache::build(&resources, SizeProfile::new(kind, card)) {
            Ok(cache) => cache,
            Err(err) => {
                eprintln!("failed to build {kind:?} cache: {err}");
                return ExitCode::FAILURE;
            }
        };

        let dir = format!("{out_dir}/{kind:?}").to_lowercase();
        if let Err(err) = fs::create_dir_all(&dir) {
            eprintln!("failed to create {dir}: {err}");
            return ExitCode::FAILURE;
        }

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let path = format!("{dir}/{suit:?}_{}.png", rank.label()).to_lowercase();
                if let Err(err) = cache.card(suit, rank).save(&path) {
                    eprintln!("failed to write {path}: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        if let Err(err) = cache.hidden().save(format!("{dir}/hidden.png")) {
            eprintln!("failed to write hidden image: {err}");
            return ExitCode::FAILURE;
        }
        println!("wrote 53 {kind:?} images to {dir}");
    }

    // Deal a few cards to show the deck side of the crate.
    match Deck::new(1, 4) {
        Ok(mut deck) => {
            print!("top of a fresh shuffle:");
            for _ in 0..5 {
                if let Some(card) = deck.pop() {
                    print!(" {}{:?}", card.rank.label(), card.suit);
                }
            }
            println!();
        }
        Err(err) => {
            eprintln!("deck error: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

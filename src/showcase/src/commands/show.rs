use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use crate::lib::page::load_page;
use anyhow::Context;
use clap::Parser;
use showcase_core::card::{render_card, WorkflowCard};

/// Shows the card for one page.
#[derive(Parser)]
pub struct ShowOpts {
    /// The page to show, as listed by `showcase pages`.
    slug: String,

    /// Output the card as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, opts: ShowOpts) -> ShowcaseResult {
    let (page, descriptor) = load_page(env, &opts.slug)?;
    let card = WorkflowCard::build(env.get_showcase(), page, &descriptor);

    if opts.json {
        let json = serde_json::to_string_pretty(&card)
            .with_context(|| format!("Failed to serialize card for '{}'.", page.slug))?;
        println!("{}", json);
    } else {
        print!("{}", render_card(&card)?);
    }
    Ok(())
}

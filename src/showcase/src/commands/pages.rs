use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use clap::Parser;
use serde::Serialize;
use showcase_core::config::Showcase;

/// Lists the pages of the showcase.
#[derive(Parser)]
pub struct PagesOpts {
    /// Output as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PageEntry<'a> {
    slug: &'a str,
    title: &'a str,
    descriptor: String,
    present: bool,
}

fn page_entries(showcase: &Showcase) -> Vec<PageEntry<'_>> {
    showcase
        .pages()
        .iter()
        .map(|page| {
            let path = showcase.descriptor_path(page);
            PageEntry {
                slug: &page.slug,
                title: &page.title,
                descriptor: path.display().to_string(),
                present: path.is_file(),
            }
        })
        .collect()
}

fn render_pages(showcase: &Showcase, json: bool) -> ShowcaseResult<String> {
    let entries = page_entries(showcase);
    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let lines: Vec<_> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.present { "" } else { " (missing)" };
            format!(
                "{:<20} {:<30} {}{}",
                entry.slug, entry.title, entry.descriptor, marker
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

pub fn exec(env: &dyn Environment, opts: PagesOpts) -> ShowcaseResult {
    println!("{}", render_pages(env.get_showcase(), opts.json)?);
    Ok(())
}

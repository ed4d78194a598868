use crate::lib::environment::Environment;
use crate::lib::error::ShowcaseResult;
use clap::Subcommand;

mod describe;
mod details;
mod export;
mod init;
mod pages;
mod show;

#[derive(Subcommand)]
pub enum ShowcaseCommand {
    Describe(describe::DescribeOpts),
    Details(details::DetailsOpts),
    Export(export::ExportOpts),
    Init(init::InitOpts),
    Pages(pages::PagesOpts),
    Show(show::ShowOpts),
}

pub fn exec(env: &dyn Environment, cmd: ShowcaseCommand) -> ShowcaseResult {
    match cmd {
        ShowcaseCommand::Describe(v) => describe::exec(env, v),
        ShowcaseCommand::Details(v) => details::exec(env, v),
        ShowcaseCommand::Export(v) => export::exec(env, v),
        ShowcaseCommand::Init(v) => init::exec(env, v),
        ShowcaseCommand::Pages(v) => pages::exec(env, v),
        ShowcaseCommand::Show(v) => show::exec(env, v),
    }
}

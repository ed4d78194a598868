use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderCardError {
    #[error("Failed to render card for page '{0}'")]
    RenderFailed(String, #[source] handlebars::RenderError),
}

/// The type to represent showcase CLI results.
pub type ShowcaseResult<T = ()> = anyhow::Result<T>;

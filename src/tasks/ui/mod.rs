pub(crate) mod cli_deserialize;
pub(crate) mod color;
pub(crate) mod logging;
pub(crate) mod render;

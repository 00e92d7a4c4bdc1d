use common::config::ClientConfig;
use yew::prelude::*;

/// Properties for the `ToolkitComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ToolkitProps {
    /// API prefix and download file names. Read once when the component is
    /// created; the defaults target the same origin.
    #[prop_or_default]
    pub config: ClientConfig,
}

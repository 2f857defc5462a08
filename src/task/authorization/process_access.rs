//! Process allow-list resolution.

use crate::{
    identity::domain::Principal,
    process::{
        domain::{ProcessKey, ProcessUri},
        ports::ProcessCatalog,
    },
};
use tracing::{debug, warn};

/// Returns whether the catalog permits the principal to trigger
/// `message_name` on the process named by `instantiates_uri`.
///
/// A malformed URI or a catalog failure counts as "not allowed".
pub async fn is_process_allowed<S, P>(
    catalog: &P,
    scope: &S,
    principal: &Principal,
    instantiates_uri: &str,
    message_name: &str,
) -> bool
where
    S: Sync + ?Sized,
    P: ProcessCatalog<S> + ?Sized,
{
    let uri = match ProcessUri::parse(instantiates_uri) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(instantiates_uri, error = %err, "instantiatesUri not parseable");
            return false;
        }
    };
    let key = ProcessKey::for_message(&uri, message_name);
    match catalog.find_allowed_process(scope, principal, &key).await {
        Ok(entry) => entry.is_some(),
        Err(err) => {
            warn!(
                process = %key,
                user = principal.name(),
                error = %err,
                "process catalog lookup failed"
            );
            false
        }
    }
}

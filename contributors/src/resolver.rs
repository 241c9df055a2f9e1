use crate::api::{Client, Result};
use crate::model::{Identity, Profile};
use log::{debug, info};

/// One profile lookup, no caching.
pub async fn resolve<CLIENT: Client>(client: &CLIENT, identity: &Identity) -> Result<Profile> {
    debug!("Fetching user {}", identity);
    client.user(identity).await
}

/// Resolves every identity in iteration order. The first failed lookup aborts.
pub async fn resolve_all<CLIENT, IDENTITIES>(client: &CLIENT, identities: IDENTITIES) -> Result<Vec<Profile>>
where
    CLIENT: Client,
    IDENTITIES: IntoIterator<Item = Identity>,
{
    info!("Fetching user info");
    let mut profiles = Vec::new();
    for identity in identities {
        profiles.push(resolve(client, &identity).await?);
    }
    Ok(profiles)
}

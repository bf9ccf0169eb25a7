use lad_decoder::{BatchConfig, ProgramData, decode_account, decode_batch};
use lad_types::{Account, AccountType};
use lad_wire::Pubkey;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::source::AccountSource;

/// Reads serviceability accounts through an [`AccountSource`].
pub struct ServiceabilityClient<S> {
    source: S,
    program_id: Pubkey,
    batch: BatchConfig,
}

impl<S: AccountSource> ServiceabilityClient<S> {
    pub fn new(source: S, program_id: Pubkey) -> Self {
        Self {
            source,
            program_id,
            batch: BatchConfig::default(),
        }
    }

    pub fn from_config(source: S, config: &ClientConfig) -> Self {
        Self {
            source,
            program_id: config.serviceability_program_id,
            batch: config.batch,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Fetch every account the program owns and decode them as a batch.
    ///
    /// Accounts that fail to decode land in [`ProgramData::errors`]; they
    /// do not fail the call.
    ///
    /// # Errors
    ///
    /// Only a failure of the source itself.
    pub async fn fetch_program_data(&self) -> Result<ProgramData, ClientError> {
        self.fetch_filtered(&[]).await
    }

    /// Like [`fetch_program_data`](Self::fetch_program_data), restricted
    /// to one account type by its leading tag.
    ///
    /// # Errors
    ///
    /// Only a failure of the source itself.
    pub async fn fetch_accounts_of_type(
        &self,
        account_type: AccountType,
    ) -> Result<ProgramData, ClientError> {
        self.fetch_filtered(&[account_type.wire_id()]).await
    }

    async fn fetch_filtered(&self, filter: &[u8]) -> Result<ProgramData, ClientError> {
        let accounts = self.source.fetch_by_tag(&self.program_id, filter).await?;
        debug!(
            program = %self.program_id,
            accounts = accounts.len(),
            "fetched serviceability accounts"
        );

        let data = decode_batch(accounts, &self.batch);
        if !data.errors.is_empty() {
            warn!(
                decoded = data.record_count(),
                failed = data.errors.len(),
                "some serviceability accounts failed to decode"
            );
            for e in &data.errors {
                debug!(error = %e, "account parse error");
            }
        }
        Ok(data)
    }

    /// Fetch and decode one account.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] if the source has nothing at `id`.
    /// - [`ClientError::Decode`] for any decode failure, including an
    ///   empty buffer or a tag this crate does not decode.
    pub async fn fetch_account(&self, id: &Pubkey) -> Result<Account, ClientError> {
        let data = self
            .source
            .fetch(id)
            .await?
            .ok_or(ClientError::NotFound { id: *id })?;
        let account = decode_account(&data, &self.batch)?;
        debug!(%id, account_type = account.account_type().name(), "decoded account");
        Ok(account)
    }
}

use lad_types::revdist::{
    ComputedSolanaValidatorDebts, ContributorRewards, Distribution, Journal, ProgramConfig,
    ShapleyOutputStorage, SolanaValidatorDeposit,
};
use lad_types::TypeError;
use lad_wire::fixed::decode_account;
use lad_wire::{FixedAccount, Pubkey};
use tracing::{debug, info};

use crate::error::ClientError;
use crate::source::{AccountSource, AddressDeriver, LedgerRecordSource, NoLedger};

const SEED_PROGRAM_CONFIG: &[u8] = b"program_config";
const SEED_DISTRIBUTION: &[u8] = b"distribution";
const SEED_JOURNAL: &[u8] = b"journal";
const SEED_SOLANA_VALIDATOR_DEPOSIT: &[u8] = b"solana_validator_deposit";
const SEED_CONTRIBUTOR_REWARDS: &[u8] = b"contributor_rewards";

const SEED_SOLANA_VALIDATOR_DEBT: &[u8] = b"solana_validator_debt";
const SEED_DZ_CONTRIBUTOR_REWARDS: &[u8] = b"dz_contributor_rewards";
const SEED_SHAPLEY_OUTPUT: &[u8] = b"shapley_output";

/// Reads revenue-distribution accounts and their ledger records.
///
/// `L` is the ledger record source. A client built with [`new`](Self::new)
/// has none, and the two ledger fetches fail with
/// [`ClientError::LedgerNotConfigured`] until one is attached with
/// [`with_ledger`](Self::with_ledger).
pub struct RevDistClient<S, D, L = NoLedger> {
    source: S,
    deriver: D,
    ledger: L,
    program_id: Pubkey,
}

impl<S, D> RevDistClient<S, D, NoLedger>
where
    S: AccountSource,
    D: AddressDeriver,
{
    pub fn new(source: S, deriver: D, program_id: Pubkey) -> Self {
        Self {
            source,
            deriver,
            ledger: NoLedger,
            program_id,
        }
    }
}

impl<S, D, L> RevDistClient<S, D, L>
where
    S: AccountSource,
    D: AddressDeriver,
    L: LedgerRecordSource,
{
    pub fn with_ledger<L2: LedgerRecordSource>(self, ledger: L2) -> RevDistClient<S, D, L2> {
        RevDistClient {
            source: self.source,
            deriver: self.deriver,
            ledger,
            program_id: self.program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// # Errors
    ///
    /// Derivation, source, not-found or decode failure.
    pub async fn fetch_config(&self) -> Result<ProgramConfig, ClientError> {
        self.fetch_pda(&[SEED_PROGRAM_CONFIG]).await
    }

    /// # Errors
    ///
    /// Derivation, source, not-found or decode failure.
    pub async fn fetch_distribution(&self, dz_epoch: u64) -> Result<Distribution, ClientError> {
        self.fetch_pda(&[SEED_DISTRIBUTION, &dz_epoch.to_le_bytes()])
            .await
    }

    /// # Errors
    ///
    /// Derivation, source, not-found or decode failure.
    pub async fn fetch_journal(&self) -> Result<Journal, ClientError> {
        self.fetch_pda(&[SEED_JOURNAL]).await
    }

    /// # Errors
    ///
    /// Derivation, source, not-found or decode failure.
    pub async fn fetch_validator_deposit(
        &self,
        node_id: &Pubkey,
    ) -> Result<SolanaValidatorDeposit, ClientError> {
        self.fetch_pda(&[SEED_SOLANA_VALIDATOR_DEPOSIT, node_id.as_bytes()])
            .await
    }

    /// # Errors
    ///
    /// A source failure, or [`ClientError::InvalidAccount`] naming the
    /// first account that fails to decode.
    pub async fn fetch_all_validator_deposits(
        &self,
    ) -> Result<Vec<SolanaValidatorDeposit>, ClientError> {
        self.fetch_all().await
    }

    /// # Errors
    ///
    /// Derivation, source, not-found or decode failure.
    pub async fn fetch_contributor_rewards(
        &self,
        service_key: &Pubkey,
    ) -> Result<ContributorRewards, ClientError> {
        self.fetch_pda(&[SEED_CONTRIBUTOR_REWARDS, service_key.as_bytes()])
            .await
    }

    /// # Errors
    ///
    /// A source failure, or [`ClientError::InvalidAccount`] naming the
    /// first account that fails to decode.
    pub async fn fetch_all_contributor_rewards(
        &self,
    ) -> Result<Vec<ContributorRewards>, ClientError> {
        self.fetch_all().await
    }

    /// Validator debts computed for `dz_epoch`, keyed under the program's
    /// debt accountant.
    ///
    /// # Errors
    ///
    /// - [`ClientError::LedgerNotConfigured`] without a ledger source.
    /// - Any failure fetching the program config.
    /// - [`ClientError::NotFound`] if the record does not exist.
    /// - A short header or strict decode failure.
    pub async fn fetch_validator_debts(
        &self,
        dz_epoch: u64,
    ) -> Result<ComputedSolanaValidatorDebts, ClientError> {
        let config = self.fetch_config().await?;
        let key = self.deriver.derive_record_key(
            &config.debt_accountant_key,
            &[SEED_SOLANA_VALIDATOR_DEBT, &dz_epoch.to_le_bytes()],
        )?;
        let record = self.fetch_record(&key).await?;
        Ok(ComputedSolanaValidatorDebts::decode(&record)?)
    }

    /// Shapley reward shares for `dz_epoch`, keyed under the program's
    /// rewards accountant.
    ///
    /// # Errors
    ///
    /// As for [`fetch_validator_debts`](Self::fetch_validator_debts).
    pub async fn fetch_reward_shares(
        &self,
        dz_epoch: u64,
    ) -> Result<ShapleyOutputStorage, ClientError> {
        let config = self.fetch_config().await?;
        let key = self.deriver.derive_record_key(
            &config.rewards_accountant_key,
            &[
                SEED_DZ_CONTRIBUTOR_REWARDS,
                &dz_epoch.to_le_bytes(),
                SEED_SHAPLEY_OUTPUT,
            ],
        )?;
        let record = self.fetch_record(&key).await?;
        Ok(ShapleyOutputStorage::decode(&record)?)
    }

    async fn fetch_pda<T: FixedAccount>(&self, seeds: &[&[u8]]) -> Result<T, ClientError> {
        let (address, _bump) = self.deriver.derive(seeds, &self.program_id)?;
        let data = self
            .source
            .fetch(&address)
            .await?
            .ok_or(ClientError::NotFound { id: address })?;
        debug!(record = T::NAME, %address, len = data.len(), "fetched revdist account");
        decode_account::<T>(&data).map_err(|e| ClientError::from(TypeError::from(e)))
    }

    async fn fetch_all<T: FixedAccount>(&self) -> Result<Vec<T>, ClientError> {
        let discriminator = T::discriminator();
        let accounts = self
            .source
            .fetch_by_tag(&self.program_id, discriminator.as_bytes())
            .await?;
        info!(record = T::NAME, count = accounts.len(), "fetched revdist accounts");

        accounts
            .into_iter()
            .map(|(id, data)| {
                decode_account::<T>(&data).map_err(|e| ClientError::InvalidAccount {
                    id,
                    source: TypeError::from(e).into(),
                })
            })
            .collect()
    }

    async fn fetch_record(&self, key: &Pubkey) -> Result<Vec<u8>, ClientError> {
        let record = self
            .ledger
            .record_data(key)
            .await?
            .ok_or(ClientError::NotFound { id: *key })?;
        debug!(%key, len = record.len(), "fetched ledger record");
        Ok(record)
    }
}

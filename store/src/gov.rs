//! Governance store: per-status proposal caches and enrichment orchestration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::task::JoinHandle;

use govlens_rpc::{GovRpc, RpcError};
use govlens_types::{
    DepositList, GovParams, PageRequest, PageResponse, Proposal, ProposalId, ProposalPage,
    ProposalStatus, Tally, Vote, VoteList, VoteOption,
};

use crate::diagnostics::{Diagnostics, FetchFailure};
use crate::loading::LoadingStatus;
use crate::wallet::WalletContext;

/// Substring that marks a proposal title as spam.
const SPAM_TITLE_MARKER: &str = "airdrop";

/// One stored proposal. Enrichment tasks each hold an `Arc` to exactly one
/// slot and write only that slot's enrichment fields.
pub type ProposalSlot = Arc<RwLock<Proposal>>;

/// A stored page: independently addressable proposal slots plus pagination.
///
/// Cloning shares the slots, so a page handed out by
/// [`GovStore::fetch_proposals`] keeps receiving enrichment results after it
/// is returned.
#[derive(Clone, Default)]
pub struct StoredPage {
    pub proposals: Vec<ProposalSlot>,
    pub pagination: PageResponse,
}

impl StoredPage {
    fn from_page(page: ProposalPage) -> Self {
        Self {
            proposals: page
                .proposals
                .into_iter()
                .map(|proposal| Arc::new(RwLock::new(proposal)))
                .collect(),
            pagination: page.pagination,
        }
    }

    /// Plain snapshot of the page, cloning every proposal as it stands now.
    pub fn snapshot(&self) -> ProposalPage {
        ProposalPage {
            proposals: self
                .proposals
                .iter()
                .map(|slot| read_slot(slot).clone())
                .collect(),
            pagination: self.pagination.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}

/// Caching store for governance data.
///
/// All state is owned by the store instance; [`GovStore::reset`] rebuilds it
/// from empty maps. The RPC collaborator is optional and attachable — its
/// absence is a recoverable condition, not an error.
pub struct GovStore {
    rpc: RwLock<Option<Arc<dyn GovRpc>>>,
    wallet: Arc<dyn WalletContext>,
    proposals: RwLock<HashMap<ProposalStatus, StoredPage>>,
    loading: RwLock<HashMap<ProposalStatus, LoadingStatus>>,
    params: RwLock<GovParams>,
    diagnostics: Arc<Diagnostics>,
    enrichment: Mutex<Vec<JoinHandle<()>>>,
}

impl GovStore {
    /// A store with no RPC collaborator attached yet.
    pub fn new(wallet: Arc<dyn WalletContext>) -> Self {
        Self {
            rpc: RwLock::new(None),
            wallet,
            proposals: RwLock::new(HashMap::new()),
            loading: RwLock::new(HashMap::new()),
            params: RwLock::new(GovParams::default()),
            diagnostics: Arc::new(Diagnostics::new()),
            enrichment: Mutex::new(Vec::new()),
        }
    }

    /// A store wired to the given RPC collaborator.
    pub fn with_rpc(rpc: Arc<dyn GovRpc>, wallet: Arc<dyn WalletContext>) -> Self {
        let store = Self::new(wallet);
        store.attach_rpc(rpc);
        store
    }

    /// Attach (or replace) the RPC collaborator.
    pub fn attach_rpc(&self, rpc: Arc<dyn GovRpc>) {
        *write_lock(&self.rpc) = Some(rpc);
    }

    /// Detach the RPC collaborator; subsequent fetches yield empty results.
    pub fn detach_rpc(&self) {
        *write_lock(&self.rpc) = None;
    }

    fn rpc(&self) -> Option<Arc<dyn GovRpc>> {
        read_lock(&self.rpc).clone()
    }

    /// Reset all cached state to empty. The RPC collaborator and wallet
    /// context are kept.
    pub fn reset(&self) {
        write_lock(&self.proposals).clear();
        write_lock(&self.loading).clear();
        *write_lock(&self.params) = GovParams::default();
        self.diagnostics.clear();
    }

    /// Reset, then fetch parameters and the voting-period page.
    pub async fn initial(&self) {
        self.reset();
        self.fetch_params().await;
        self.fetch_proposals(ProposalStatus::VotingPeriod, None)
            .await;
    }

    // ── Proposal fetch orchestration ─────────────────────────────────────

    /// Fetch one page of proposals for `status` and store it under that key,
    /// replacing any previous page wholesale.
    ///
    /// Never fails outward: an absent collaborator or a failed call yields an
    /// empty page, with the reason recorded on the diagnostics channel. For
    /// voting-period pages, tally and viewer-vote enrichment tasks are
    /// spawned fire-and-forget; the returned page's slots are filled in as
    /// their results arrive.
    pub async fn fetch_proposals(
        &self,
        status: ProposalStatus,
        page: Option<PageRequest>,
    ) -> StoredPage {
        self.set_loading(status, LoadingStatus::Loading);

        let Some(rpc) = self.rpc() else {
            self.diagnostics
                .record(FetchFailure::new("proposals", "RPC client not initialized"));
            let empty = StoredPage::default();
            self.store_page(status, empty.clone());
            self.set_loading(status, LoadingStatus::Loaded);
            return empty;
        };

        let mut fetched = match rpc.get_gov_proposals(status, page.as_ref()).await {
            Ok(page) => page,
            Err(e) => {
                self.diagnostics
                    .record(FetchFailure::new("proposals", e.to_string()));
                ProposalPage::empty()
            }
        };

        fetched
            .proposals
            .retain(|proposal| !is_spam_title(proposal.resolved_title()));

        let stored = StoredPage::from_page(fetched);
        self.store_page(status, stored.clone());
        self.set_loading(status, LoadingStatus::Loaded);

        if status == ProposalStatus::VotingPeriod {
            self.enrich_page(&rpc, &stored);
        }

        stored
    }

    /// Spawn tally and viewer-vote tasks for every slot in `page`.
    ///
    /// Each task owns one slot and writes only that slot's enrichment
    /// fields, so failures and completions are isolated per proposal. Tasks
    /// from a superseded fetch keep running against the old, no longer
    /// stored slots.
    fn enrich_page(&self, rpc: &Arc<dyn GovRpc>, page: &StoredPage) {
        let viewer = self.wallet.current_address();
        let mut handles = lock_handles(&self.enrichment);
        handles.retain(|handle| !handle.is_finished());

        for slot in &page.proposals {
            let proposal_id = read_slot(slot).proposal_id.clone();

            let task_rpc = Arc::clone(rpc);
            let task_slot = Arc::clone(slot);
            let task_diagnostics = Arc::clone(&self.diagnostics);
            let task_id = proposal_id.clone();
            handles.push(tokio::spawn(async move {
                let tally = match task_rpc.get_gov_proposal_tally(&task_id).await {
                    Ok(tally) => tally,
                    Err(e) => {
                        task_diagnostics.record(FetchFailure::for_proposal(
                            "tally",
                            task_id.clone(),
                            e.to_string(),
                        ));
                        Tally::zero()
                    }
                };
                write_slot(&task_slot).final_tally_result = Some(tally);
            }));

            match viewer.clone() {
                None => {
                    write_slot(slot).voter_status = Some(VoteOption::SENTINEL);
                }
                Some(voter) => {
                    let task_rpc = Arc::clone(rpc);
                    let task_slot = Arc::clone(slot);
                    let task_diagnostics = Arc::clone(&self.diagnostics);
                    handles.push(tokio::spawn(async move {
                        let option = match task_rpc
                            .get_gov_proposal_votes_voter(&proposal_id, &voter)
                            .await
                        {
                            // An unset option is as good as no vote.
                            Ok(vote) => match vote.option {
                                VoteOption::Unspecified => VoteOption::SENTINEL,
                                option => option,
                            },
                            Err(e) => {
                                task_diagnostics.record(FetchFailure::for_proposal(
                                    "voter_vote",
                                    proposal_id.clone(),
                                    e.to_string(),
                                ));
                                VoteOption::SENTINEL
                            }
                        };
                        write_slot(&task_slot).voter_status = Some(option);
                    }));
                }
            }
        }
    }

    /// Await all outstanding enrichment tasks.
    ///
    /// Enrichment is fire-and-forget for callers of
    /// [`GovStore::fetch_proposals`]; this exists so tests and shutdown paths
    /// can wait for quiescence.
    pub async fn settle_enrichment(&self) {
        let handles: Vec<JoinHandle<()>> = lock_handles(&self.enrichment).drain(..).collect();
        for handle in handles {
            let _ = handle.await;
        }
    }

    // ── Parameters ───────────────────────────────────────────────────────

    /// Fetch deposit parameters, overwriting the stored snapshot on success.
    ///
    /// The voting and tally slots of [`GovParams`] are not populated by this
    /// path.
    pub async fn fetch_params(&self) {
        let Some(rpc) = self.rpc() else {
            self.diagnostics
                .record(FetchFailure::new("params", "RPC client not initialized"));
            return;
        };
        match rpc.get_gov_params_deposit().await {
            Ok(deposit) => {
                write_lock(&self.params).deposit = deposit;
            }
            Err(e) => {
                self.diagnostics
                    .record(FetchFailure::new("params", e.to_string()));
            }
        }
    }

    // ── Single-entity fetchers ───────────────────────────────────────────
    //
    // Direct pass-throughs to the collaborator, guarded by the availability
    // check; `None` means absent collaborator or failed call, with the
    // reason on the diagnostics channel.

    pub async fn fetch_tally(&self, proposal_id: &ProposalId) -> Option<Tally> {
        let rpc = self.guarded_rpc("tally", Some(proposal_id))?;
        self.absorb(
            "tally",
            Some(proposal_id),
            rpc.get_gov_proposal_tally(proposal_id).await,
        )
    }

    pub async fn fetch_proposal(&self, proposal_id: &ProposalId) -> Option<Proposal> {
        let rpc = self.guarded_rpc("proposal", Some(proposal_id))?;
        self.absorb(
            "proposal",
            Some(proposal_id),
            rpc.get_gov_proposal(proposal_id).await,
        )
    }

    pub async fn fetch_proposal_deposits(
        &self,
        proposal_id: &ProposalId,
        page: Option<PageRequest>,
    ) -> Option<DepositList> {
        let rpc = self.guarded_rpc("deposits", Some(proposal_id))?;
        self.absorb(
            "deposits",
            Some(proposal_id),
            rpc.get_gov_proposal_deposits(proposal_id, page.as_ref())
                .await,
        )
    }

    pub async fn fetch_proposal_votes(
        &self,
        proposal_id: &ProposalId,
        page: Option<PageRequest>,
    ) -> Option<VoteList> {
        let rpc = self.guarded_rpc("votes", Some(proposal_id))?;
        self.absorb(
            "votes",
            Some(proposal_id),
            rpc.get_gov_proposal_votes(proposal_id, page.as_ref()).await,
        )
    }

    pub async fn fetch_proposal_votes_voter(
        &self,
        proposal_id: &ProposalId,
        voter: &str,
    ) -> Option<Vote> {
        let rpc = self.guarded_rpc("voter_vote", Some(proposal_id))?;
        self.absorb(
            "voter_vote",
            Some(proposal_id),
            rpc.get_gov_proposal_votes_voter(proposal_id, voter).await,
        )
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The stored page for `status`, if one has been fetched.
    pub fn proposals(&self, status: ProposalStatus) -> Option<StoredPage> {
        read_lock(&self.proposals).get(&status).cloned()
    }

    /// Loading state for `status`; `Idle` if never fetched.
    pub fn loading(&self, status: ProposalStatus) -> LoadingStatus {
        read_lock(&self.loading)
            .get(&status)
            .copied()
            .unwrap_or_default()
    }

    /// Current parameter snapshot.
    pub fn params(&self) -> GovParams {
        read_lock(&self.params).clone()
    }

    /// The diagnostics channel for absorbed failures.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn set_loading(&self, status: ProposalStatus, state: LoadingStatus) {
        write_lock(&self.loading).insert(status, state);
    }

    fn store_page(&self, status: ProposalStatus, page: StoredPage) {
        write_lock(&self.proposals).insert(status, page);
    }

    fn guarded_rpc(
        &self,
        operation: &'static str,
        proposal_id: Option<&ProposalId>,
    ) -> Option<Arc<dyn GovRpc>> {
        let rpc = self.rpc();
        if rpc.is_none() {
            self.diagnostics.record(FetchFailure {
                operation,
                proposal_id: proposal_id.cloned(),
                reason: "RPC client not initialized".to_string(),
            });
        }
        rpc
    }

    fn absorb<T>(
        &self,
        operation: &'static str,
        proposal_id: Option<&ProposalId>,
        result: Result<T, RpcError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.diagnostics.record(FetchFailure {
                    operation,
                    proposal_id: proposal_id.cloned(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

/// Spam heuristic: titles mentioning airdrops are dropped from stored pages.
fn is_spam_title(title: &str) -> bool {
    title.to_lowercase().contains(SPAM_TITLE_MARKER)
}

// Lock helpers. None of the store's guards is ever held across an await, so
// a poisoned lock only means a panicking reader/writer elsewhere; recover
// the data rather than propagate the panic.

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

fn read_slot(slot: &ProposalSlot) -> RwLockReadGuard<'_, Proposal> {
    slot.read().unwrap_or_else(|e| e.into_inner())
}

fn write_slot(slot: &ProposalSlot) -> RwLockWriteGuard<'_, Proposal> {
    slot.write().unwrap_or_else(|e| e.into_inner())
}

fn lock_handles(handles: &Mutex<Vec<JoinHandle<()>>>) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
    handles.lock().unwrap_or_else(|e| e.into_inner())
}

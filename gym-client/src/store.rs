//! Member store
//!
//! Owns the in-memory member list together with the dashboard UI state and
//! keeps the list in line with confirmed server responses only. Every remote
//! operation runs through the store's [`RequestTracker`].

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::models::{Member, MemberFormData, MembershipStatus, MembershipType};
use shared::stats::DashboardStats;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::activity::{ActivityAction, ActivityLog, RecentActivity};
use crate::api::MemberApi;
use crate::tracker::{RequestState, RequestTracker};

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// First value of the display counter
pub const MEMBER_ID_COUNTER_START: u64 = 1000;

/// Store operation error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The remote call failed; carries the normalized message
    #[error("{0}")]
    Request(String),

    /// Delete confirmed with no member selected
    #[error("No member selected")]
    NothingSelected,
}

/// Top-level view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Members,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    shown_at: Instant,
}

/// Modal, navigation and filter state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Member being edited; `None` while the modal creates a new member
    pub current_editing_id: Option<i64>,
    pub show_member_modal: bool,
    pub show_delete_modal: bool,
    pub member_to_delete: Option<i64>,
    pub active_section: Section,
    pub search_term: String,
    pub status_filter: Option<MembershipStatus>,
    pub type_filter: Option<MembershipType>,
    toast: Option<Toast>,
}

impl UiState {
    /// Visible toast message, if one was shown less than [`TOAST_DURATION`] ago
    pub fn toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < TOAST_DURATION)
            .map(|t| t.message.as_str())
    }

    /// Whether `member` passes the search term and both filters
    pub fn matches(&self, member: &Member) -> bool {
        let term = self.search_term.trim().to_lowercase();
        let matches_search = term.is_empty()
            || member.full_name.to_lowercase().contains(&term)
            || member.email.to_lowercase().contains(&term);
        let matches_status = self.status_filter.is_none_or(|s| member.status == s);
        let matches_type = self.type_filter.is_none_or(|t| member.membership_type == t);
        matches_search && matches_status && matches_type
    }
}

#[derive(Debug)]
struct StoreState {
    members: Vec<Member>,
    member_id_counter: u64,
    ui: UiState,
    activities: ActivityLog,
}

pub struct MemberStore<A: MemberApi> {
    api: A,
    tracker: RequestTracker,
    state: Mutex<StoreState>,
}

impl<A: MemberApi> MemberStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tracker: RequestTracker::new(),
            state: Mutex::new(StoreState {
                members: Vec::new(),
                member_id_counter: MEMBER_ID_COUNTER_START,
                ui: UiState::default(),
                activities: ActivityLog::default(),
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    // ========== Remote operations ==========

    /// Initial load. Failures are logged and recorded, never returned.
    pub async fn start(&self) {
        if let Err(e) = self.fetch_all().await {
            error!(error = %e, "Failed to fetch members on start");
        }
    }

    /// Replace the list with the server's current one
    pub async fn fetch_all(&self) -> Result<Vec<Member>, StoreError> {
        self.tracker
            .track(async {
                let members = self.api.list_members().await?;
                let count = members.len();
                self.lock().members = members.clone();
                info!(count, "Member list refreshed");
                Ok::<_, crate::ClientError>(members)
            })
            .await
            .map_err(StoreError::Request)
    }

    /// [`fetch_all`](Self::fetch_all) for retry buttons; the outcome is only
    /// visible through [`request_state`](Self::request_state).
    pub async fn refresh(&self) {
        if let Err(e) = self.fetch_all().await {
            warn!(error = %e, "Refresh failed");
        }
    }

    /// Create a member and append the server's copy
    pub async fn create(&self, form: &MemberFormData) -> Result<Member, StoreError> {
        self.tracker
            .track(async {
                let member = self.api.create_member(form).await?;
                {
                    let mut state = self.lock();
                    // A re-sent create can echo an id we already hold
                    match state.members.iter_mut().find(|m| m.id == member.id) {
                        Some(existing) => *existing = member.clone(),
                        None => state.members.push(member.clone()),
                    }
                    state.member_id_counter += 1;
                }
                info!(id = member.id, "Member created");
                Ok::<_, crate::ClientError>(member)
            })
            .await
            .map_err(StoreError::Request)
    }

    /// Update a member; the local entry with the same id (if any) is replaced
    pub async fn update(&self, id: i64, form: &MemberFormData) -> Result<Member, StoreError> {
        self.tracker
            .track(async {
                let member = self.api.update_member(id, form).await?;
                {
                    let mut state = self.lock();
                    for entry in state.members.iter_mut().filter(|m| m.id == id) {
                        *entry = member.clone();
                    }
                }
                info!(id, "Member updated");
                Ok::<_, crate::ClientError>(member)
            })
            .await
            .map_err(StoreError::Request)
    }

    /// Delete a member; removing an id not held locally is not an error
    pub async fn remove(&self, id: i64) -> Result<(), StoreError> {
        self.tracker
            .track(async {
                self.api.delete_member(id).await?;
                self.lock().members.retain(|m| m.id != id);
                info!(id, "Member deleted");
                Ok::<_, crate::ClientError>(())
            })
            .await
            .map_err(StoreError::Request)
    }

    // ========== Form workflows ==========

    /// Submit the member modal: update when editing, create otherwise.
    ///
    /// Success closes the modal, shows a toast and logs the activity. Failure
    /// shows `Error: <message>` and keeps the modal open.
    pub async fn submit_member_form(&self, form: &MemberFormData) -> Result<Member, StoreError> {
        let editing = self.lock().ui.current_editing_id;
        let (result, action, toast) = match editing {
            Some(id) => (
                self.update(id, form).await,
                ActivityAction::Updated,
                "Member updated successfully!",
            ),
            None => (
                self.create(form).await,
                ActivityAction::Added,
                "Member added successfully!",
            ),
        };

        match result {
            Ok(member) => {
                self.show_toast(toast);
                self.add_recent_activity(action, form.full_name.clone());
                self.close_member_modal();
                Ok(member)
            }
            Err(e) => {
                self.show_toast(format!("Error: {e}"));
                Err(e)
            }
        }
    }

    /// Delete the member chosen with [`request_delete`](Self::request_delete).
    ///
    /// A selection missing from the local list closes the modal with a
    /// `Member not found` toast and sends nothing.
    pub async fn confirm_delete(&self) -> Result<(), StoreError> {
        let Some(id) = self.lock().ui.member_to_delete else {
            return Err(StoreError::NothingSelected);
        };
        // Not held locally: treat as already deleted, no remote call
        let Some(member) = self.member(id) else {
            self.show_toast("Member not found");
            self.cancel_delete();
            return Ok(());
        };
        let name = member.full_name;

        match self.remove(id).await {
            Ok(()) => {
                self.show_toast("Member deleted successfully!");
                self.add_recent_activity(ActivityAction::Deleted, name);
                self.cancel_delete();
                Ok(())
            }
            Err(e) => {
                self.show_toast(format!("Error: {e}"));
                Err(e)
            }
        }
    }

    // ========== Read access ==========

    pub fn members(&self) -> Vec<Member> {
        self.lock().members.clone()
    }

    pub fn member(&self, id: i64) -> Option<Member> {
        self.lock().members.iter().find(|m| m.id == id).cloned()
    }

    /// Members passing the current search term and filters
    pub fn filtered_members(&self) -> Vec<Member> {
        let state = self.lock();
        state
            .members
            .iter()
            .filter(|m| state.ui.matches(m))
            .cloned()
            .collect()
    }

    pub fn request_state(&self) -> RequestState {
        self.tracker.state()
    }

    pub fn loading(&self) -> bool {
        self.tracker.loading()
    }

    pub fn error(&self) -> Option<String> {
        self.tracker.error()
    }

    /// Display counter, advanced once per successful create
    pub fn member_id_counter(&self) -> u64 {
        self.lock().member_id_counter
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats_at(shared::util::today())
    }

    pub fn stats_at(&self, today: chrono::NaiveDate) -> DashboardStats {
        DashboardStats::compute(&self.lock().members, today)
    }

    pub fn recent_activities(&self) -> Vec<RecentActivity> {
        self.lock().activities.entries()
    }

    pub fn ui(&self) -> UiState {
        self.lock().ui.clone()
    }

    pub fn toast(&self) -> Option<String> {
        self.lock().ui.toast().map(str::to_string)
    }

    /// Member currently open in the edit modal
    pub fn editing_member(&self) -> Option<Member> {
        let id = self.lock().ui.current_editing_id?;
        self.member(id)
    }

    // ========== UI state ==========

    pub fn open_create_modal(&self) {
        let mut state = self.lock();
        state.ui.current_editing_id = None;
        state.ui.show_member_modal = true;
    }

    pub fn open_edit_modal(&self, id: i64) {
        let mut state = self.lock();
        state.ui.current_editing_id = Some(id);
        state.ui.show_member_modal = true;
    }

    pub fn close_member_modal(&self) {
        let mut state = self.lock();
        state.ui.current_editing_id = None;
        state.ui.show_member_modal = false;
    }

    pub fn request_delete(&self, id: i64) {
        let mut state = self.lock();
        state.ui.member_to_delete = Some(id);
        state.ui.show_delete_modal = true;
    }

    pub fn cancel_delete(&self) {
        let mut state = self.lock();
        state.ui.member_to_delete = None;
        state.ui.show_delete_modal = false;
    }

    pub fn show_toast(&self, message: impl Into<String>) {
        self.lock().ui.toast = Some(Toast {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn set_active_section(&self, section: Section) {
        self.lock().ui.active_section = section;
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.lock().ui.search_term = term.into();
    }

    pub fn set_status_filter(&self, status: Option<MembershipStatus>) {
        self.lock().ui.status_filter = status;
    }

    pub fn set_type_filter(&self, membership_type: Option<MembershipType>) {
        self.lock().ui.type_filter = membership_type;
    }

    pub fn add_recent_activity(&self, action: ActivityAction, member_name: impl Into<String>) {
        self.lock().activities.record(action, member_name);
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientError, ClientResult};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    /// In-memory backend standing in for the HTTP API
    #[derive(Default)]
    struct FakeApi {
        members: Mutex<Vec<Member>>,
        next_id: Mutex<i64>,
        fail_next: Mutex<Option<ClientError>>,
        /// Each update waits for the next gate, in call order
        update_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    }

    impl FakeApi {
        fn with_members(members: Vec<Member>) -> Self {
            let next_id = members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
            Self {
                members: Mutex::new(members),
                next_id: Mutex::new(next_id),
                ..Default::default()
            }
        }

        fn fail_next(&self, err: ClientError) {
            *self.fail_next.lock().unwrap() = Some(err);
        }

        fn take_failure(&self) -> ClientResult<()> {
            match self.fail_next.lock().unwrap().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    fn to_member(id: i64, form: &MemberFormData) -> Member {
        Member {
            id,
            member_id: None,
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            membership_type: form.membership_type,
            status: form.status,
            start_date: form.start_date.clone(),
            end_date: form.end_date.clone(),
            created_at: Some("2026-10-19T09:00:00Z".into()),
        }
    }

    #[async_trait]
    impl MemberApi for FakeApi {
        async fn list_members(&self) -> ClientResult<Vec<Member>> {
            self.take_failure()?;
            Ok(self.members.lock().unwrap().clone())
        }

        async fn get_member(&self, id: i64) -> ClientResult<Member> {
            self.take_failure()?;
            self.members
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound("Member not found".into()))
        }

        async fn create_member(&self, form: &MemberFormData) -> ClientResult<Member> {
            self.take_failure()?;
            let id = {
                let mut next = self.next_id.lock().unwrap();
                let id = *next;
                *next += 1;
                id
            };
            let member = to_member(id, form);
            self.members.lock().unwrap().push(member.clone());
            Ok(member)
        }

        async fn update_member(&self, id: i64, form: &MemberFormData) -> ClientResult<Member> {
            let gate = self.update_gates.lock().unwrap().pop_front();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.take_failure()?;
            let member = to_member(id, form);
            let mut members = self.members.lock().unwrap();
            match members.iter_mut().find(|m| m.id == id) {
                Some(existing) => *existing = member.clone(),
                None => members.push(member.clone()),
            }
            Ok(member)
        }

        async fn delete_member(&self, id: i64) -> ClientResult<()> {
            self.take_failure()?;
            self.members.lock().unwrap().retain(|m| m.id != id);
            Ok(())
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    fn form(name: &str) -> MemberFormData {
        MemberFormData {
            full_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "555-0100".into(),
            membership_type: MembershipType::Basic,
            status: MembershipStatus::Active,
            start_date: Some("2026-10-01".into()),
            end_date: Some("2027-10-01".into()),
        }
    }

    fn seeded() -> Vec<Member> {
        vec![
            to_member(1, &form("Ana Lima")),
            to_member(2, &form("Bo Chen")),
            to_member(5, &form("Cy Park")),
        ]
    }

    #[tokio::test]
    async fn test_start_loads_members() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        assert_eq!(store.members().len(), 3);
        assert_eq!(store.request_state(), RequestState::default());
    }

    #[tokio::test]
    async fn test_start_failure_is_recorded_not_raised() {
        let api = FakeApi::with_members(seeded());
        api.fail_next(ClientError::Transport("connection refused".into()));
        let store = MemberStore::new(api);
        store.start().await;
        assert!(store.members().is_empty());
        assert_eq!(store.error().as_deref(), Some("connection refused"));
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_existing_list() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.fetch_all().await.unwrap();
        store.api().fail_next(ClientError::Timeout);
        let err = store.fetch_all().await.unwrap_err();
        assert_eq!(err, StoreError::Request(ClientError::Timeout.to_string()));
        assert_eq!(store.members().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_twice_is_stable() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        let first = store.fetch_all().await.unwrap();
        let second = store.fetch_all().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.members(), second);
    }

    #[tokio::test]
    async fn test_create_then_fetch_contains_member() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        let created = store.create(&form("Dee Ray")).await.unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(store.members().last().map(|m| m.id), Some(6));
        assert_eq!(store.member_id_counter(), MEMBER_ID_COUNTER_START + 1);

        let refreshed = store.fetch_all().await.unwrap();
        assert!(refreshed.iter().any(|m| m.id == created.id && m.full_name == "Dee Ray"));
    }

    #[tokio::test]
    async fn test_create_failure_leaves_list() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        store.api().fail_next(ClientError::RequestFailed {
            status: 400,
            message: "Email already registered".into(),
        });
        let err = store.create(&form("Ana Lima")).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(store.members().len(), 3);
        assert_eq!(store.member_id_counter(), MEMBER_ID_COUNTER_START);
        assert_eq!(store.error().as_deref(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_update_replaces_matching_entry() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        let mut changes = form("Bo Chen");
        changes.status = MembershipStatus::Suspended;
        store.update(2, &changes).await.unwrap();

        let members = store.members();
        assert_eq!(members.len(), 3);
        assert_eq!(members[1].id, 2);
        assert_eq!(members[1].status, MembershipStatus::Suspended);
    }

    #[tokio::test]
    async fn test_update_unknown_local_id_is_success_without_change() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        let before = store.members();
        store.update(99, &form("Ghost")).await.unwrap();
        assert_eq!(store.members(), before);
    }

    #[tokio::test]
    async fn test_remove_nonexistent_id_leaves_list() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        store.remove(42).await.unwrap();
        assert_eq!(store.members().len(), 3);
        store.remove(1).await.unwrap();
        assert!(store.member(1).is_none());
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_member() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        store.api().fail_next(ClientError::RequestFailed {
            status: 500,
            message: "HTTP 500: Internal Server Error".into(),
        });
        assert!(store.remove(1).await.is_err());
        assert!(store.member(1).is_some());
    }

    #[tokio::test]
    async fn test_concurrent_updates_last_response_wins() {
        let api = FakeApi::with_members(seeded());
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        api.update_gates.lock().unwrap().extend([rx_a, rx_b]);
        let store = MemberStore::new(api);
        store.start().await;

        let a = form("Cy Park A");
        let b = form("Cy Park B");
        let release = async {
            tx_b.send(()).unwrap();
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            tx_a.send(()).unwrap();
        };
        let (ra, rb, ()) = tokio::join!(store.update(5, &a), store.update(5, &b), release);
        ra.unwrap();
        rb.unwrap();

        // B's response arrived first, A's last
        assert_eq!(store.member(5).unwrap().full_name, "Cy Park A");
        assert_eq!(store.members().iter().filter(|m| m.id == 5).count(), 1);
        assert!(!store.loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_submit_form_create_and_edit() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;

        store.open_create_modal();
        store.submit_member_form(&form("Dee Ray")).await.unwrap();
        assert!(!store.ui().show_member_modal);
        assert_eq!(store.toast().as_deref(), Some("Member added successfully!"));

        store.open_edit_modal(1);
        assert_eq!(store.editing_member().unwrap().full_name, "Ana Lima");
        store.submit_member_form(&form("Ana Souza")).await.unwrap();
        assert_eq!(store.member(1).unwrap().full_name, "Ana Souza");
        assert_eq!(store.toast().as_deref(), Some("Member updated successfully!"));
        assert!(store.ui().current_editing_id.is_none());

        let activities = store.recent_activities();
        assert_eq!(activities[0].action, ActivityAction::Updated);
        assert_eq!(activities[0].member_name, "Ana Souza");
        assert_eq!(activities[1].action, ActivityAction::Added);
    }

    #[tokio::test]
    async fn test_submit_form_failure_keeps_modal_open() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        store.open_create_modal();
        store.api().fail_next(ClientError::Timeout);
        assert!(store.submit_member_form(&form("Dee Ray")).await.is_err());
        assert!(store.ui().show_member_modal);
        assert_eq!(
            store.toast().as_deref(),
            Some("Error: Request timeout - please check your connection")
        );
        assert!(store.recent_activities().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_delete_flow() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        assert_eq!(store.confirm_delete().await, Err(StoreError::NothingSelected));

        store.request_delete(2);
        assert!(store.ui().show_delete_modal);
        store.confirm_delete().await.unwrap();
        assert!(store.member(2).is_none());
        assert!(!store.ui().show_delete_modal);
        assert_eq!(store.recent_activities()[0].to_string(), "Member Bo Chen was deleted");
    }

    #[tokio::test]
    async fn test_confirm_delete_missing_member_skips_server() {
        let api = FakeApi::with_members(seeded());
        // Would surface as an error toast if the delete reached the server
        api.fail_next(ClientError::RequestFailed {
            status: 404,
            message: "Member not found".into(),
        });
        let store = MemberStore::new(api);

        store.request_delete(42);
        assert_eq!(store.confirm_delete().await, Ok(()));
        let ui = store.ui();
        assert!(!ui.show_delete_modal);
        assert!(ui.member_to_delete.is_none());
        assert_eq!(store.toast().as_deref(), Some("Member not found"));
        assert!(store.recent_activities().is_empty());
        assert_eq!(store.request_state(), RequestState::default());

        // The pending failure was never consumed, so no request went out
        assert!(store.api().take_failure().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires() {
        let store = MemberStore::new(FakeApi::default());
        store.show_toast("Saved");
        assert_eq!(store.toast().as_deref(), Some("Saved"));
        tokio::time::advance(Duration::from_millis(2900)).await;
        assert!(store.toast().is_some());
        tokio::time::advance(Duration::from_millis(200)).await;
        assert!(store.toast().is_none());
    }

    #[tokio::test]
    async fn test_filters() {
        let mut members = seeded();
        members[1].status = MembershipStatus::Expired;
        members[2].membership_type = MembershipType::Vip;
        let store = MemberStore::new(FakeApi::with_members(members));
        store.start().await;

        store.set_search_term("CHEN");
        assert_eq!(store.filtered_members().len(), 1);

        store.set_search_term("example.com");
        store.set_status_filter(Some(MembershipStatus::Active));
        assert_eq!(store.filtered_members().len(), 2);

        store.set_type_filter(Some(MembershipType::Vip));
        let filtered = store.filtered_members();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 5);

        store.set_search_term("");
        store.set_status_filter(None);
        store.set_type_filter(None);
        assert_eq!(store.filtered_members().len(), 3);
    }

    #[tokio::test]
    async fn test_stats_follow_list() {
        let store = MemberStore::new(FakeApi::with_members(seeded()));
        store.start().await;
        let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let stats = store.stats_at(today);
        assert_eq!(stats.active_members, 3);
        assert_eq!(stats.new_this_month, 3);
        assert_eq!(stats.expired, 0);
        store.set_active_section(Section::Members);
        assert_eq!(store.ui().active_section, Section::Members);
    }
}

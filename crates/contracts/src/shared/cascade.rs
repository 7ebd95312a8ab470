//! Cascading selection resolver.
//!
//! A [`SelectionChain`] is an ordered list of dependent dropdowns
//! (Vehicle Type → Brand → Model → Variant, Category → Subcategory). The
//! options of slot `k` are fetched using the value of slot `k - 1` as the
//! scoping key. Changing a slot clears everything below it synchronously,
//! and each fetch carries a [`FetchRequest`] ticket so a late response for
//! an outdated scope can never overwrite the current options.

use super::error::DashboardError;
use super::select_option::{label_for, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// The upstream slot has no value yet.
    AwaitingUpstream,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Slot {
    pub key: String,
    pub label: String,
    value: Option<String>,
    options: Vec<SelectOption>,
    status: SlotStatus,
    pending: Option<u64>,
}

impl Slot {
    fn new(key: &str, label: &str, status: SlotStatus) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: None,
            options: Vec::new(),
            status,
            pending: None,
        }
    }

    fn reset(&mut self) {
        self.value = None;
        self.options.clear();
        self.pending = None;
        self.status = SlotStatus::AwaitingUpstream;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }
}

/// Ticket for an option fetch. `scope_key` is the upstream value the
/// options belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub slot: usize,
    pub scope_key: String,
    pub generation: u64,
}

/// What a slot needs given the current chain, independent of any
/// in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredFetch {
    /// Root slot, fetched unscoped on mount.
    Root,
    /// Upstream slot is empty: show the placeholder, fetch nothing.
    None,
    Scoped { scope_key: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Applied { slot: usize, count: usize },
    /// Outdated ticket, result discarded.
    Stale,
    Failed { slot: usize, error: DashboardError },
}

#[derive(Debug, Clone)]
pub struct SelectionChain {
    slots: Vec<Slot>,
    next_generation: u64,
}

impl SelectionChain {
    /// Builds a chain from `(key, label)` pairs, root first.
    pub fn new(slots: &[(&str, &str)]) -> Self {
        let slots = slots
            .iter()
            .enumerate()
            .map(|(idx, (key, label))| {
                let status = if idx == 0 {
                    SlotStatus::Loading
                } else {
                    SlotStatus::AwaitingUpstream
                };
                Slot::new(key, label, status)
            })
            .collect();
        Self {
            slots,
            next_generation: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, idx: usize) -> Option<&Slot> {
        self.slots.get(idx)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.key == key)
    }

    pub fn value(&self, idx: usize) -> Option<&str> {
        self.slots.get(idx).and_then(Slot::value)
    }

    pub fn options(&self, idx: usize) -> &[SelectOption] {
        self.slots.get(idx).map(Slot::options).unwrap_or(&[])
    }

    pub fn status(&self, idx: usize) -> Option<SlotStatus> {
        self.slots.get(idx).map(Slot::status)
    }

    /// Snapshot of every slot value, root first.
    pub fn values(&self) -> Vec<Option<String>> {
        self.slots.iter().map(|s| s.value.clone()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.value.is_some())
    }

    /// Display label of the chosen option.
    pub fn selected_label(&self, idx: usize) -> Option<&str> {
        let slot = self.slots.get(idx)?;
        label_for(&slot.options, slot.value.as_deref()?)
    }

    pub fn set_root_options(&mut self, options: Vec<SelectOption>) {
        if let Some(root) = self.slots.first_mut() {
            root.options = options;
            root.status = SlotStatus::Ready;
        }
    }

    pub fn fail_root(&mut self) {
        if let Some(root) = self.slots.first_mut() {
            root.options.clear();
            root.status = SlotStatus::Failed;
        }
    }

    /// Pure: which fetch slot `idx` needs for the current upstream value.
    pub fn required_fetch(&self, idx: usize) -> RequiredFetch {
        if idx == 0 {
            return RequiredFetch::Root;
        }
        match self.value(idx - 1) {
            Some(scope) => RequiredFetch::Scoped {
                scope_key: scope.to_string(),
            },
            None => RequiredFetch::None,
        }
    }

    /// Records the choice for `idx`, clears every downstream slot and returns
    /// the fetch for `idx + 1` when there is one.
    ///
    /// An empty `option_id` counts as no selection. Choosing the value the slot
    /// already holds changes nothing.
    pub fn select(&mut self, idx: usize, option_id: Option<&str>) -> Option<FetchRequest> {
        if idx >= self.slots.len() {
            log::warn!("cascade: select on missing slot {idx}");
            return None;
        }
        let option_id = option_id.filter(|id| !id.is_empty()).map(str::to_string);
        if self.slots[idx].value == option_id {
            return None;
        }

        self.slots[idx].value = option_id;
        for slot in &mut self.slots[idx + 1..] {
            slot.reset();
        }
        self.issue(idx + 1)
    }

    /// Clears `idx` and everything below it without fetching.
    pub fn clear(&mut self, idx: usize) {
        if idx >= self.slots.len() {
            return;
        }
        self.slots[idx].value = None;
        for slot in &mut self.slots[idx + 1..] {
            slot.reset();
        }
    }

    /// Re-issues the fetch for `idx`, e.g. after a failure.
    pub fn retry(&mut self, idx: usize) -> Option<FetchRequest> {
        if idx == 0 {
            return None;
        }
        self.issue(idx)
    }

    fn issue(&mut self, idx: usize) -> Option<FetchRequest> {
        if idx >= self.slots.len() {
            return None;
        }
        let RequiredFetch::Scoped { scope_key } = self.required_fetch(idx) else {
            return None;
        };
        let generation = self.next_generation;
        self.next_generation += 1;

        let slot = self.slots.get_mut(idx)?;
        slot.options.clear();
        slot.status = SlotStatus::Loading;
        slot.pending = Some(generation);

        Some(FetchRequest {
            slot: idx,
            scope_key,
            generation,
        })
    }

    /// Applies a fetch result if `request` is still the slot's latest ticket
    /// and its scope still matches the upstream value.
    pub fn resolve(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<SelectOption>, DashboardError>,
    ) -> Resolution {
        let current_scope = request
            .slot
            .checked_sub(1)
            .and_then(|up| self.value(up))
            .map(str::to_string);

        let Some(slot) = self.slots.get_mut(request.slot) else {
            return Resolution::Stale;
        };
        if slot.pending != Some(request.generation)
            || current_scope.as_deref() != Some(request.scope_key.as_str())
        {
            log::debug!(
                "cascade: discarding stale {} options for scope {} (generation {})",
                slot.key,
                request.scope_key,
                request.generation
            );
            return Resolution::Stale;
        }

        slot.pending = None;
        match result {
            Ok(options) => {
                let count = options.len();
                slot.options = options;
                slot.status = SlotStatus::Ready;
                Resolution::Applied {
                    slot: request.slot,
                    count,
                }
            }
            Err(error) => {
                slot.options.clear();
                slot.status = SlotStatus::Failed;
                Resolution::Failed {
                    slot: request.slot,
                    error,
                }
            }
        }
    }

    /// Placeholder text for the dropdown at `idx`.
    pub fn placeholder(&self, idx: usize) -> String {
        let Some(slot) = self.slots.get(idx) else {
            return String::new();
        };
        let noun = slot.label.to_lowercase();
        match slot.status {
            SlotStatus::AwaitingUpstream => {
                let upstream = idx
                    .checked_sub(1)
                    .and_then(|up| self.slots.get(up))
                    .map(|s| s.label.to_lowercase())
                    .unwrap_or_default();
                format!("Please select {upstream} first")
            }
            SlotStatus::Loading => "Loading…".to_string(),
            SlotStatus::Failed => format!("Failed to load {noun}"),
            SlotStatus::Ready if slot.options.is_empty() => format!("No {noun} found"),
            SlotStatus::Ready => format!("Select {noun}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE: usize = 0;
    const BRAND: usize = 1;
    const MODEL: usize = 2;
    const VARIANT: usize = 3;

    fn vehicle_chain() -> SelectionChain {
        SelectionChain::new(&[
            ("vehicleType", "Vehicle Type"),
            ("brand", "Brand"),
            ("model", "Model"),
            ("variant", "Variant"),
        ])
    }

    fn opts(items: &[(&str, &str)]) -> Vec<SelectOption> {
        items.iter().map(|(id, l)| SelectOption::new(*id, *l)).collect()
    }

    fn loaded_chain() -> SelectionChain {
        let mut chain = vehicle_chain();
        chain.set_root_options(opts(&[("car", "Car"), ("bike", "Bike")]));
        let req = chain.select(TYPE, Some("car")).unwrap();
        chain.resolve(&req, Ok(opts(&[("acme", "Acme"), ("zenith", "Zenith")])));
        let req = chain.select(BRAND, Some("acme")).unwrap();
        chain.resolve(&req, Ok(opts(&[("a1", "A-One")])));
        let req = chain.select(MODEL, Some("a1")).unwrap();
        chain.resolve(&req, Ok(opts(&[("v1", "Base")])));
        chain.select(VARIANT, Some("v1"));
        chain
    }

    #[test]
    fn test_initial_state() {
        let chain = vehicle_chain();
        assert_eq!(chain.status(TYPE), Some(SlotStatus::Loading));
        assert_eq!(chain.placeholder(TYPE), "Loading…");
        assert_eq!(chain.status(BRAND), Some(SlotStatus::AwaitingUpstream));
        assert_eq!(chain.placeholder(BRAND), "Please select vehicle type first");
        assert_eq!(chain.placeholder(MODEL), "Please select brand first");
        assert_eq!(chain.required_fetch(TYPE), RequiredFetch::Root);
        assert_eq!(chain.required_fetch(BRAND), RequiredFetch::None);
    }

    #[test]
    fn test_select_clears_downstream_synchronously() {
        let mut chain = loaded_chain();
        assert!(chain.is_complete());

        let req = chain.select(TYPE, Some("bike")).unwrap();
        assert_eq!(req.slot, BRAND);
        assert_eq!(req.scope_key, "bike");
        for idx in [BRAND, MODEL, VARIANT] {
            assert_eq!(chain.value(idx), None);
        }
        assert!(chain.options(MODEL).is_empty());
        assert!(chain.options(VARIANT).is_empty());
        assert_eq!(chain.status(BRAND), Some(SlotStatus::Loading));
        assert_eq!(chain.status(MODEL), Some(SlotStatus::AwaitingUpstream));
        assert_eq!(chain.value(TYPE), Some("bike"));
    }

    #[test]
    fn test_late_response_for_previous_brand_is_ignored() {
        let mut chain = vehicle_chain();
        chain.set_root_options(opts(&[("car", "Car")]));
        let req = chain.select(TYPE, Some("car")).unwrap();
        chain.resolve(&req, Ok(opts(&[("acme", "Acme"), ("zenith", "Zenith")])));

        let acme = chain.select(BRAND, Some("acme")).unwrap();
        let zenith = chain.select(BRAND, Some("zenith")).unwrap();

        let applied = chain.resolve(&zenith, Ok(opts(&[("z1", "Zeta")])));
        assert_eq!(applied, Resolution::Applied { slot: MODEL, count: 1 });

        let late = chain.resolve(&acme, Ok(opts(&[("a1", "A-One"), ("a2", "A-Two")])));
        assert_eq!(late, Resolution::Stale);
        assert_eq!(chain.options(MODEL), opts(&[("z1", "Zeta")]).as_slice());
    }

    #[test]
    fn test_late_response_before_current_one_is_ignored() {
        let mut chain = vehicle_chain();
        let req = chain.select(TYPE, Some("car")).unwrap();
        chain.resolve(&req, Ok(opts(&[("acme", "Acme"), ("zenith", "Zenith")])));

        let acme = chain.select(BRAND, Some("acme")).unwrap();
        let zenith = chain.select(BRAND, Some("zenith")).unwrap();

        assert_eq!(chain.resolve(&acme, Ok(opts(&[("a1", "A-One")]))), Resolution::Stale);
        assert_eq!(chain.status(MODEL), Some(SlotStatus::Loading));
        assert!(chain.options(MODEL).is_empty());

        chain.resolve(&zenith, Ok(opts(&[("z1", "Zeta")])));
        assert_eq!(chain.options(MODEL).len(), 1);
    }

    #[test]
    fn test_same_scope_reselected_uses_latest_ticket() {
        let mut chain = vehicle_chain();
        let req = chain.select(TYPE, Some("car")).unwrap();
        chain.resolve(&req, Ok(opts(&[("acme", "Acme"), ("zenith", "Zenith")])));

        let first = chain.select(BRAND, Some("acme")).unwrap();
        chain.select(BRAND, Some("zenith"));
        let second = chain.select(BRAND, Some("acme")).unwrap();
        assert_eq!(first.scope_key, second.scope_key);
        assert_ne!(first.generation, second.generation);
        assert_eq!(chain.resolve(&first, Ok(vec![])), Resolution::Stale);
        assert!(matches!(chain.resolve(&second, Ok(vec![])), Resolution::Applied { .. }));
    }

    #[test]
    fn test_reselect_same_value_is_noop() {
        let mut chain = loaded_chain();
        assert_eq!(chain.select(BRAND, Some("acme")), None);
        assert_eq!(chain.value(MODEL), Some("a1"));
        assert_eq!(chain.value(VARIANT), Some("v1"));
    }

    #[test]
    fn test_empty_selection_stops_cascade() {
        let mut chain = loaded_chain();
        assert_eq!(chain.select(BRAND, Some("")), None);
        assert_eq!(chain.value(BRAND), None);
        assert_eq!(chain.status(MODEL), Some(SlotStatus::AwaitingUpstream));
        assert_eq!(chain.required_fetch(MODEL), RequiredFetch::None);
        assert_eq!(chain.placeholder(MODEL), "Please select brand first");
        // brand options stay available for a new choice
        assert_eq!(chain.options(BRAND).len(), 2);
    }

    #[test]
    fn test_failure_empties_slot_and_keeps_upstream() {
        let mut chain = loaded_chain();
        let req = chain.select(BRAND, Some("zenith")).unwrap();
        let err = DashboardError::from_status("models", 500);
        let res = chain.resolve(&req, Err(err.clone()));
        assert_eq!(res, Resolution::Failed { slot: MODEL, error: err });
        assert!(chain.options(MODEL).is_empty());
        assert_eq!(chain.status(MODEL), Some(SlotStatus::Failed));
        assert_eq!(chain.placeholder(MODEL), "Failed to load model");
        assert_eq!(chain.value(BRAND), Some("zenith"));
        assert_eq!(chain.options(BRAND).len(), 2);

        let again = chain.retry(MODEL).unwrap();
        assert_eq!(again.scope_key, "zenith");
        chain.resolve(&again, Ok(vec![]));
        assert_eq!(chain.placeholder(MODEL), "No model found");
    }

    #[test]
    fn test_clear_and_labels() {
        let mut chain = loaded_chain();
        assert_eq!(chain.selected_label(BRAND), Some("Acme"));
        assert_eq!(chain.placeholder(BRAND), "Select brand");
        assert_eq!(
            chain.values(),
            vec![
                Some("car".to_string()),
                Some("acme".to_string()),
                Some("a1".to_string()),
                Some("v1".to_string())
            ]
        );

        chain.clear(MODEL);
        assert_eq!(chain.value(MODEL), None);
        assert_eq!(chain.value(VARIANT), None);
        assert_eq!(chain.options(MODEL).len(), 1);
        assert_eq!(chain.index_of("variant"), Some(VARIANT));
    }

    #[test]
    fn test_last_slot_selection_issues_nothing() {
        let mut chain = loaded_chain();
        chain.select(VARIANT, None);
        assert_eq!(chain.select(VARIANT, Some("v1")), None);
        assert_eq!(chain.select(9, Some("x")), None);
    }
}

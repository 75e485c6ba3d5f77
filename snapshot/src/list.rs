use crate::coerce::coerce_list_options;
use crate::container::ContainerSnapshotBuilder;
use crate::error::SnapshotError;
use crate::runtime::{ContainerSource, NamespaceLookup};
use crate::types::{ContainerStatus, ListOptions, StateBundle};
use podview_core::{Container, PsOpts};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Created,
    Id,
    Image,
    Names,
    RunningFor,
    Status,
}

const SORT_KEYS: &[(&str, SortKey)] = &[
    ("created", SortKey::Created),
    ("id", SortKey::Id),
    ("image", SortKey::Image),
    ("names", SortKey::Names),
    ("runningfor", SortKey::RunningFor),
    ("status", SortKey::Status),
];

fn sort_key(name: &str) -> SortKey {
    SORT_KEYS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, key)| *key)
        .unwrap_or(SortKey::Created)
}

fn compare(key: SortKey, a: &(String, StateBundle), b: &(String, StateBundle)) -> Ordering {
    match key {
        SortKey::Created => b.1.created_at.cmp(&a.1.created_at),
        SortKey::RunningFor => a.1.created_at.cmp(&b.1.created_at),
        SortKey::Id => a.0.cmp(&b.0),
        SortKey::Image => a.1.image_name.cmp(&b.1.image_name),
        SortKey::Names => a.1.name.cmp(&b.1.name),
        SortKey::Status => a.1.state.to_string().cmp(&b.1.state.to_string()),
    }
}

pub struct ContainerLister<'a> {
    containers: &'a dyn ContainerSource,
    namespaces: &'a dyn NamespaceLookup,
}

impl<'a> ContainerLister<'a> {
    pub fn new(containers: &'a dyn ContainerSource, namespaces: &'a dyn NamespaceLookup) -> Self {
        Self {
            containers,
            namespaces,
        }
    }

    pub async fn list(&self, opts: PsOpts) -> Result<Vec<Container>, SnapshotError> {
        let opts = coerce_list_options(opts);
        tracing::debug!(
            "Listing containers (all: {}, last: {}, latest: {}, sort: {:?})",
            opts.all,
            opts.last,
            opts.latest,
            opts.sort
        );

        let ids = self
            .containers
            .container_ids()
            .await
            .map_err(SnapshotError::ContainerList)?;

        let mut selected = Vec::with_capacity(ids.len());
        for id in ids {
            let bundle = self
                .containers
                .state(&id, &opts)
                .await
                .map_err(|source| SnapshotError::ContainerState {
                    id: id.clone(),
                    source,
                })?;
            selected.push((id, bundle));
        }

        let selected = select(selected, &opts);

        let builder = ContainerSnapshotBuilder::new(self.namespaces);
        let mut snapshots = Vec::with_capacity(selected.len());
        for (id, bundle) in &selected {
            snapshots.push(builder.build(id, bundle).await);
        }
        Ok(snapshots)
    }
}

fn select(mut entries: Vec<(String, StateBundle)>, opts: &ListOptions) -> Vec<(String, StateBundle)> {
    let last = if opts.latest { 1 } else { opts.last.max(0) as usize };

    if !opts.all && last == 0 {
        entries.retain(|(_, bundle)| bundle.state == ContainerStatus::Running);
    }
    if opts.pod {
        entries.retain(|(_, bundle)| bundle.pod.is_some());
    }
    if last > 0 {
        entries.sort_by(|a, b| compare(SortKey::Created, a, b));
        entries.truncate(last);
    }

    let key = sort_key(&opts.sort);
    entries.sort_by(|a, b| compare(key, a, b));
    entries
}

//! Bookmark Organizer for Tabshelf.
//!
//! Turns a selection of tabs into a dated folder tree:
//!
//! - the main folder is titled with the ISO date and reused when it exists,
//! - a single normal window is saved straight into the main folder,
//! - several windows, or any private tab, get one subfolder per group
//!   (`Window N` for normal windows, `$Temp` for private tabs),
//! - URLs already present in the day's tree are skipped.
//!
//! Planning is pure; [`BookmarkOrganizerTrait::execute`] applies a plan to a
//! store sequentially and stops at the first failure without rolling back.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::types::bookmark::BookmarkNode;
use crate::types::errors::{BookmarkError, SaveError};
use crate::types::plan::{
    ExistingTree, FolderRef, GroupKey, NamingCollision, SaveOp, SavePlan, SaveSummary, WindowGroup,
};
use crate::types::settings::{DateClock, NamingSettings};
use crate::types::tab::{SelectedTab, WindowId};

/// Trait defining the organizer's planning and execution.
pub trait BookmarkOrganizerTrait {
    /// Main folder title for `date`.
    fn folder_title(&self, date: NaiveDate) -> String;
    fn plan(
        &self,
        selection: &[SelectedTab],
        date: NaiveDate,
        existing: &ExistingTree,
    ) -> Result<SavePlan, SaveError>;
    fn execute<S: BookmarkManagerTrait + ?Sized>(
        &self,
        plan: &SavePlan,
        store: &mut S,
    ) -> Result<SaveSummary, SaveError>;
    /// Snapshot, plan and execute in one go.
    fn save<S: BookmarkManagerTrait + ?Sized>(
        &self,
        store: &mut S,
        selection: &[SelectedTab],
        date: NaiveDate,
    ) -> Result<SaveSummary, SaveError>;
}

/// Organizer configured with folder naming rules.
pub struct BookmarkOrganizer {
    naming: NamingSettings,
}

impl BookmarkOrganizer {
    pub fn new(naming: NamingSettings) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> &NamingSettings {
        &self.naming
    }
}

impl Default for BookmarkOrganizer {
    fn default() -> Self {
        Self::new(NamingSettings::default())
    }
}

/// Today's date on the configured clock.
pub fn today(clock: DateClock) -> NaiveDate {
    match clock {
        DateClock::Utc => chrono::Utc::now().date_naive(),
        DateClock::Local => chrono::Local::now().date_naive(),
    }
}

/// Drops tabs whose URL already appeared earlier in the selection.
pub fn dedupe_by_url(selection: Vec<SelectedTab>) -> Vec<SelectedTab> {
    let mut seen = HashSet::new();
    selection
        .into_iter()
        .filter(|tab| seen.insert(tab.url.clone()))
        .collect()
}

/// Partitions selected tabs by window; all private tabs share one group.
pub fn group_by_window(selection: &[SelectedTab]) -> BTreeMap<GroupKey, WindowGroup> {
    let mut groups: BTreeMap<GroupKey, WindowGroup> = BTreeMap::new();
    for tab in selection {
        let key = if tab.is_private {
            GroupKey::Private
        } else {
            GroupKey::Window(tab.window_id)
        };
        groups
            .entry(key)
            .or_insert_with(|| WindowGroup {
                key,
                window_id: tab.window_id,
                is_private: tab.is_private,
                is_current_window: tab.is_current_window,
                tabs: Vec::new(),
            })
            .tabs
            .push(tab.clone());
    }
    groups
}

/// Subfolder title for every group, plus any titles claimed by more than one window.
///
/// Normal windows are numbered by their rank in ascending id order; the
/// current window always takes `1` without shifting the others. The private
/// group claims its title too, so a clash with a window title is reported.
pub fn subfolder_titles(
    groups: &BTreeMap<GroupKey, WindowGroup>,
    naming: &NamingSettings,
) -> (BTreeMap<GroupKey, String>, Vec<NamingCollision>) {
    let mut titles = BTreeMap::new();
    let mut claimed: BTreeMap<String, Vec<WindowId>> = BTreeMap::new();

    let windows = groups.values().filter(|g| !g.is_private);
    for (rank, group) in windows.enumerate() {
        let number = if group.is_current_window { 1 } else { rank + 1 };
        let title = naming.window_folder_title(number);
        claimed.entry(title.clone()).or_default().push(group.window_id);
        titles.insert(group.key, title);
    }

    if let Some(group) = groups.get(&GroupKey::Private) {
        let title = naming.private_folder_title.clone();
        claimed.entry(title.clone()).or_default().push(group.window_id);
        titles.insert(GroupKey::Private, title);
    }

    let collisions = claimed
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(title, window_ids)| NamingCollision { title, window_ids })
        .collect();

    (titles, collisions)
}

/// Reads the day's folder tree: first folder titled `title`, its direct
/// subfolders, and bookmark URLs at most one level below it.
pub fn snapshot_existing<S: BookmarkManagerTrait + ?Sized>(
    store: &S,
    title: &str,
) -> Result<ExistingTree, BookmarkError> {
    let main = match store.search_folders_by_title(title)?.into_iter().next() {
        Some(folder) => folder,
        None => return Ok(ExistingTree::default()),
    };

    let mut tree = ExistingTree::default();
    for child in store.list_children(&main.id)? {
        match child {
            BookmarkNode::Bookmark(b) => {
                tree.urls.insert(b.url);
            }
            BookmarkNode::Folder(folder) => {
                for grandchild in store.list_children(&folder.id)? {
                    if let Some(url) = grandchild.url() {
                        tree.urls.insert(url.to_string());
                    }
                }
                tree.subfolders.push(folder);
            }
        }
    }
    tree.main_folder = Some(main);
    Ok(tree)
}

fn resolve(folder: &FolderRef, created: &[Option<String>]) -> Result<String, BookmarkError> {
    match folder {
        FolderRef::Existing(id) => Ok(id.clone()),
        FolderRef::Planned(index) => created
            .get(*index)
            .and_then(|id| id.clone())
            .ok_or(BookmarkError::UnresolvedFolder(*index)),
    }
}

impl BookmarkOrganizerTrait for BookmarkOrganizer {
    fn folder_title(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn plan(
        &self,
        selection: &[SelectedTab],
        date: NaiveDate,
        existing: &ExistingTree,
    ) -> Result<SavePlan, SaveError> {
        if selection.is_empty() {
            return Err(SaveError::EmptySelection);
        }

        let folder_title = self.folder_title(date);
        let mut ops = Vec::new();
        let main_folder = match &existing.main_folder {
            Some(folder) => FolderRef::Existing(folder.id.clone()),
            None => {
                ops.push(SaveOp::CreateFolder {
                    title: folder_title.clone(),
                });
                FolderRef::Planned(0)
            }
        };

        let groups = group_by_window(selection);
        let window_count = groups.values().filter(|g| !g.is_private).count();
        let use_subfolders = window_count > 1 || groups.contains_key(&GroupKey::Private);
        let (titles, naming_collisions) = subfolder_titles(&groups, &self.naming);

        for collision in &naming_collisions {
            warn!(
                "windows {:?} all resolve to subfolder \"{}\"; saving them together",
                collision.window_ids, collision.title
            );
        }

        let mut subfolders: HashMap<String, FolderRef> = HashMap::new();
        let mut bookmark_count = 0;
        let mut skipped_urls = Vec::new();

        for (key, group) in &groups {
            let parent = match titles.get(key).filter(|_| use_subfolders) {
                None => main_folder.clone(),
                Some(title) => match subfolders.get(title) {
                    Some(folder) => folder.clone(),
                    None => {
                        let folder = match existing.subfolder(title) {
                            Some(f) => FolderRef::Existing(f.id.clone()),
                            None => {
                                ops.push(SaveOp::CreateSubfolder {
                                    parent: main_folder.clone(),
                                    title: title.clone(),
                                });
                                FolderRef::Planned(ops.len() - 1)
                            }
                        };
                        subfolders.insert(title.clone(), folder.clone());
                        folder
                    }
                },
            };

            for tab in &group.tabs {
                if existing.urls.contains(&tab.url) {
                    skipped_urls.push(tab.url.clone());
                    continue;
                }
                ops.push(SaveOp::CreateBookmark {
                    parent: parent.clone(),
                    title: tab.title.clone(),
                    url: tab.url.clone(),
                });
                bookmark_count += 1;
            }
        }

        debug!(
            "planned {} op(s) for \"{}\": {} bookmark(s), {} skipped",
            ops.len(),
            folder_title,
            bookmark_count,
            skipped_urls.len()
        );

        Ok(SavePlan {
            folder_title,
            main_folder,
            ops,
            bookmark_count,
            skipped_urls,
            naming_collisions,
        })
    }

    fn execute<S: BookmarkManagerTrait + ?Sized>(
        &self,
        plan: &SavePlan,
        store: &mut S,
    ) -> Result<SaveSummary, SaveError> {
        let mut created: Vec<Option<String>> = vec![None; plan.ops.len()];
        let mut saved = 0;

        for (index, op) in plan.ops.iter().enumerate() {
            let result = match op {
                SaveOp::CreateFolder { title } => store.create_folder(title, None).map(Some),
                SaveOp::CreateSubfolder { parent, title } => resolve(parent, &created)
                    .and_then(|pid| store.create_folder(title, Some(&pid)))
                    .map(Some),
                SaveOp::CreateBookmark { parent, title, url } => resolve(parent, &created)
                    .and_then(|pid| store.create_bookmark(&pid, title, url))
                    .map(|_| None),
            };

            match result {
                Ok(Some(folder_id)) => created[index] = Some(folder_id),
                Ok(None) => saved += 1,
                Err(e) => {
                    warn!(
                        "save into \"{}\" aborted at step {} of {}: {}",
                        plan.folder_title,
                        index + 1,
                        plan.ops.len(),
                        e
                    );
                    return Err(SaveError::StoreOperationFailure(e));
                }
            }
        }

        let folder_id = resolve(&plan.main_folder, &created)?;

        Ok(SaveSummary {
            saved,
            skipped: plan.skipped_urls.len(),
            folder_title: plan.folder_title.clone(),
            folder_id,
        })
    }

    fn save<S: BookmarkManagerTrait + ?Sized>(
        &self,
        store: &mut S,
        selection: &[SelectedTab],
        date: NaiveDate,
    ) -> Result<SaveSummary, SaveError> {
        if selection.is_empty() {
            return Err(SaveError::EmptySelection);
        }

        let title = self.folder_title(date);
        let existing = snapshot_existing(&*store, &title)?;
        let plan = self.plan(selection, date, &existing)?;
        let summary = self.execute(&plan, store)?;

        info!(
            "saved {} tab(s) to \"{}\" ({} already present)",
            summary.saved, summary.folder_title, summary.skipped
        );
        Ok(summary)
    }
}

use crate::core::sorter::SortPlanner;
use crate::domain::model::SortOutcome;
use crate::domain::ports::MenuService;
use crate::utils::error::{Result, TidyError};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

type FlightKey = (u64, String);

/// Drives one sort operation: fetch menu, locate the category, compute the
/// plan, write the new order back.
///
/// Re-entrant calls for the same (project, category) are rejected with
/// [`TidyError::SortInFlight`] while one is pending; the slot is released on
/// every exit path.
pub struct SortEngine<M: MenuService> {
    menu: M,
    planner: SortPlanner,
    in_flight: Mutex<HashSet<FlightKey>>,
}

impl<M: MenuService> SortEngine<M> {
    pub fn new(menu: M, planner: SortPlanner) -> Self {
        Self {
            menu,
            planner,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn sort_category(
        &self,
        project_id: u64,
        category_name: &str,
        dry_run: bool,
    ) -> Result<SortOutcome> {
        let _slot = self.claim(project_id, category_name)?;

        tracing::info!(project_id, category = category_name, "Fetching interface menu");
        let categories = self.menu.fetch_menu(project_id).await?;
        tracing::debug!(categories = categories.len(), "Menu fetched");

        let category = categories
            .into_iter()
            .find(|c| c.name == category_name)
            .ok_or_else(|| TidyError::CategoryNotFound {
                name: category_name.to_string(),
            })?;

        tracing::info!(entries = category.list.len(), "Computing sort plan");
        let plan = self.planner.plan(&category)?;

        if dry_run {
            tracing::info!("Dry run, skipping index update");
            return Ok(SortOutcome {
                category: category.name,
                plan,
                applied: false,
            });
        }

        tracing::info!(positions = plan.len(), "Applying new order");
        self.menu.apply_order(&plan.positions()).await?;

        Ok(SortOutcome {
            category: category.name,
            plan,
            applied: true,
        })
    }

    fn claim(&self, project_id: u64, category_name: &str) -> Result<FlightSlot<'_>> {
        let key = (project_id, category_name.to_string());
        let mut set = lock_unpoisoned(&self.in_flight);
        if !set.insert(key.clone()) {
            return Err(TidyError::SortInFlight {
                name: category_name.to_string(),
            });
        }
        Ok(FlightSlot {
            set: &self.in_flight,
            key,
        })
    }
}

struct FlightSlot<'a> {
    set: &'a Mutex<HashSet<FlightKey>>,
    key: FlightKey,
}

impl Drop for FlightSlot<'_> {
    fn drop(&mut self) {
        lock_unpoisoned(self.set).remove(&self.key);
    }
}

fn lock_unpoisoned<'a>(
    set: &'a Mutex<HashSet<FlightKey>>,
) -> MutexGuard<'a, HashSet<FlightKey>> {
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

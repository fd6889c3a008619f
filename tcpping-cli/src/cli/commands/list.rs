//! `tcpping list <kind>` – print the options available in a scope.

use anyhow::Result;
use tcpping_core::{
    CascadeController, Catalog, LocationDictionary, SelectOption, SelectionState,
};

use super::{select_scope, Scope};
use crate::cli::ListKind;

/// Options of `kind` in the given scope; an unset country means the
/// default (the country with provinces).
pub fn list_options<'a>(
    dictionary: &'a LocationDictionary,
    kind: ListKind,
    scope: &Scope<'_>,
) -> Result<Vec<SelectOption<'a>>> {
    let catalog = Catalog::new(dictionary);

    Ok(match kind {
        // countries are listed without resolving the scope
        ListKind::Countries => catalog.countries(),
        ListKind::Provinces => {
            let state = scope_state(dictionary, scope)?;
            catalog.provinces(state.country())
        }
        ListKind::Cities => {
            let state = scope_state(dictionary, scope)?;
            catalog.cities(state.country(), state.province())
        }
        ListKind::Providers => {
            let state = scope_state(dictionary, scope)?;
            catalog.providers(state.country(), state.province(), state.city())
        }
    })
}

fn scope_state(dictionary: &LocationDictionary, scope: &Scope<'_>) -> Result<SelectionState> {
    let ctl = CascadeController::for_dictionary(dictionary);
    select_scope(dictionary, &ctl, ctl.initial_state(), scope)
}

pub fn run_list(
    dictionary: &LocationDictionary,
    kind: ListKind,
    scope: &Scope<'_>,
    json: bool,
) -> Result<()> {
    let options = list_options(dictionary, kind, scope)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        if options.is_empty() {
            tracing::info!("nothing to list in this scope");
        }
        for option in options {
            println!("{}\t{}", option.code, option.name);
        }
    }
    Ok(())
}

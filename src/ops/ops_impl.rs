// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Modcov-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Modcov and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Converts every definition into a graph.
///
/// Structurally invalid modules are recorded as rejected; a malformed definition aborts.
pub fn build_collection(
    definitions: impl IntoIterator<Item = (ModuleId, String)>,
) -> Result<ModuleCollection, OpsError> {
    let mut collection = ModuleCollection::new();
    for (module_id, definition) in definitions {
        match parse_definition(&definition) {
            Ok(graph) => {
                tracing::debug!(
                    module = %module_id,
                    nodes = graph.len(),
                    terminals = graph.terminal_ids().len(),
                    "converted module"
                );
                collection.insert(module_id, graph);
            }
            Err(err) if err.is_per_module() => {
                tracing::warn!(module = %module_id, error = %err, "rejected module definition");
                collection.reject(module_id, err);
            }
            Err(source) => return Err(OpsError::MalformedDefinition { module_id, source }),
        }
    }

    tracing::info!(
        modules = collection.len(),
        rejected = collection.rejected().len(),
        "built module collection"
    );
    Ok(collection)
}

/// Runs `evaluate` on every accepted module in parallel and `rejected` on every rejected one.
fn evaluate_each<R, F, G>(
    collection: &ModuleCollection,
    evaluate: F,
    rejected: G,
) -> BTreeMap<ModuleId, R>
where
    R: Send,
    F: Fn(&ModuleId, &ModuleGraph) -> R + Sync,
    G: Fn(&DefinitionError) -> R,
{
    let mut results: BTreeMap<ModuleId, R> = collection
        .graphs()
        .par_iter()
        .map(|(module_id, graph)| (module_id.clone(), evaluate(module_id, graph)))
        .collect();
    for (module_id, err) in collection.rejected() {
        results.insert(module_id.clone(), rejected(err));
    }
    results
}

fn log_missing_coverage(module_id: &ModuleId, err: &CoverageError) {
    tracing::warn!(module = %module_id, error = %err, "module has no coverage");
}

/// Coverage of every module for one identifier list.
pub fn evaluate_presence(
    collection: &ModuleCollection,
    observed: &HashSet<String>,
    threshold: f64,
) -> BTreeMap<ModuleId, ModuleOutcome> {
    let results = evaluate_each(
        collection,
        |module_id, graph| {
            let mut graph = graph.clone();
            score(&mut graph, Observations::Presence(observed), AggregationMethod::default());
            coverage(&graph, threshold).map_err(|err| {
                log_missing_coverage(module_id, &err);
                ModuleError::from(err)
            })
        },
        |err| Err(ModuleError::Definition(err.clone())),
    );

    let failed = results.values().filter(|outcome| outcome.is_err()).count();
    tracing::info!(modules = results.len(), failed, "evaluated presence data");
    results
}

/// Coverage of every module for every sample column, in column order.
pub fn evaluate_abundance(
    collection: &ModuleCollection,
    columns: &[HashMap<String, f64>],
    options: ScoringOptions,
) -> BTreeMap<ModuleId, Vec<ModuleOutcome>> {
    let results = evaluate_each(
        collection,
        |module_id, graph| {
            if graph.terminal_ids().is_empty() {
                let err = CoverageError::EmptyModule;
                log_missing_coverage(module_id, &err);
                return vec![Err(ModuleError::from(err)); columns.len()];
            }

            let mut graph = graph.clone();
            columns
                .iter()
                .map(|column| {
                    score(&mut graph, Observations::Abundance(column), options.method);
                    coverage(&graph, options.threshold).map_err(ModuleError::from)
                })
                .collect()
        },
        |err| vec![Err(ModuleError::Definition(err.clone())); columns.len()],
    );

    let failed = results.values().filter(|outcomes| outcomes.iter().any(Result::is_err)).count();
    tracing::info!(
        modules = results.len(),
        samples = columns.len(),
        method = %options.method,
        failed,
        "evaluated abundance data"
    );
    results
}

/// Scores every accepted module against `observed` and keeps the graph and its best path.
pub fn explain_presence(
    collection: &ModuleCollection,
    observed: &HashSet<String>,
    threshold: f64,
) -> BTreeMap<ModuleId, ModuleExplanation> {
    collection
        .graphs()
        .par_iter()
        .map(|(module_id, graph)| {
            let mut graph = graph.clone();
            score(&mut graph, Observations::Presence(observed), AggregationMethod::default());
            let report = match coverage_report(&graph, threshold) {
                Ok(report) => Some(report),
                Err(err) => {
                    log_missing_coverage(module_id, &err);
                    None
                }
            };
            (module_id.clone(), ModuleExplanation { graph, report })
        })
        .collect()
}

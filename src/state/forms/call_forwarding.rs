//! Call forwarding editor

use super::field::{edit_text, EditAction, EditOutcome, FormField};
use super::form_state::SectionEditor;
use crate::state::{CallForwarding, ForwardingRule};

/// Label and placeholder of the value a rule collects while enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInput {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// A situation in which the assistant hands the call to a human operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub input: Option<RuleInput>,
}

pub const FORWARDING_RULES: [RuleDefinition; 10] = [
    RuleDefinition {
        id: "urgent",
        label: "Richiesta urgente",
        description: "Il paziente indica che ha un problema urgente",
        input: None,
    },
    RuleDefinition {
        id: "exam-results",
        label: "Domande su esito prestazioni",
        description: "Richieste relative a risultati di esami già effettuati",
        input: None,
    },
    RuleDefinition {
        id: "past-services",
        label: "Domande su prestazioni già effettuate",
        description: "Informazioni su visite o trattamenti precedenti",
        input: None,
    },
    RuleDefinition {
        id: "operator-request",
        label: "Richiesta esplicita di parlare con un operatore",
        description: "Il paziente chiede esplicitamente un operatore umano",
        input: None,
    },
    RuleDefinition {
        id: "keywords",
        label: "Presenza di parole chiave specifiche",
        description: "Inoltra se vengono pronunciate determinate parole",
        input: Some(RuleInput {
            label: "Parole chiave (separate da virgola)",
            placeholder: "Es. urgente, dolore, assicurazione",
        }),
    },
    RuleDefinition {
        id: "service-not-found",
        label: "Non viene trovata una prestazione richiesta",
        description: "Il paziente chiede un servizio non presente nella lista",
        input: None,
    },
    RuleDefinition {
        id: "no-availability",
        label: "Non viene trovata disponibilità oraria dopo N tentativi",
        description: "Dopo diversi tentativi non ci sono slot disponibili",
        input: Some(RuleInput {
            label: "Numero di tentativi",
            placeholder: "Es. 3",
        }),
    },
    RuleDefinition {
        id: "specific-person",
        label: "Viene richiesta una persona specifica",
        description: "Il paziente chiede di parlare con un operatore particolare",
        input: None,
    },
    RuleDefinition {
        id: "excluded-services",
        label: "Prestazioni da non gestire",
        description: "Determinate prestazioni devono essere gestite da operatore",
        input: Some(RuleInput {
            label: "Elenco prestazioni (separate da virgola)",
            placeholder: "Es. chirurgia, day hospital",
        }),
    },
    RuleDefinition {
        id: "same-day",
        label: "Prestazione per lo stesso giorno",
        description: "Il paziente richiede un appuntamento per oggi",
        input: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Switch(&'static RuleDefinition),
    Value(&'static RuleDefinition, RuleInput),
}

impl CallForwarding {
    fn targets(&self) -> Vec<Target> {
        let mut targets = Vec::new();
        for rule in &FORWARDING_RULES {
            targets.push(Target::Switch(rule));
            if let Some(input) = rule.input {
                if self.is_enabled(rule.id) {
                    targets.push(Target::Value(rule, input));
                }
            }
        }
        targets
    }

    fn rule_value(&self, id: &str) -> &str {
        self.rule(id).map(|r| r.value.as_str()).unwrap_or("")
    }
}

impl SectionEditor for CallForwarding {
    fn fields(&self) -> Vec<FormField> {
        self.targets()
            .into_iter()
            .map(|target| match target {
                Target::Switch(rule) => FormField::checkbox(rule.label, self.is_enabled(rule.id))
                    .describe(rule.description),
                Target::Value(rule, input) => {
                    FormField::text(input.label, self.rule_value(rule.id), input.placeholder)
                }
            })
            .collect()
    }

    fn edit(&self, index: usize, action: &EditAction) -> EditOutcome<Self> {
        let Some(target) = self.targets().get(index).copied() else {
            return EditOutcome::Unchanged;
        };

        match target {
            Target::Switch(rule) => {
                if *action != EditAction::Toggle {
                    return EditOutcome::Unchanged;
                }
                // Toggling keeps whatever value the rule already had
                let mut next = self.clone();
                next.rules.insert(
                    rule.id.to_string(),
                    ForwardingRule {
                        enabled: !self.is_enabled(rule.id),
                        value: self.rule_value(rule.id).to_string(),
                    },
                );
                EditOutcome::Updated(next)
            }
            Target::Value(rule, _) => {
                let mut value = self.rule_value(rule.id).to_string();
                if !edit_text(&mut value, action, false) {
                    return EditOutcome::Unchanged;
                }
                let mut next = self.clone();
                next.rules.insert(
                    rule.id.to_string(),
                    ForwardingRule {
                        enabled: self.is_enabled(rule.id),
                        value,
                    },
                );
                EditOutcome::Updated(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updated(outcome: EditOutcome<CallForwarding>) -> CallForwarding {
        match outcome {
            EditOutcome::Updated(c) => c,
            other => panic!("expected update, got {other:?}"),
        }
    }

    fn switch_index(forwarding: &CallForwarding, label: &str) -> usize {
        forwarding
            .fields()
            .iter()
            .position(|f| f.label == label)
            .unwrap()
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<_> = FORWARDING_RULES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FORWARDING_RULES.len());
    }

    #[test]
    fn test_value_input_only_while_enabled() {
        let forwarding = CallForwarding::default();
        assert_eq!(forwarding.fields().len(), FORWARDING_RULES.len());

        let idx = switch_index(&forwarding, "Presenza di parole chiave specifiche");
        let enabled = updated(forwarding.edit(idx, &EditAction::Toggle));
        assert!(enabled.is_enabled("keywords"));
        assert_eq!(enabled.fields().len(), FORWARDING_RULES.len() + 1);
        assert_eq!(
            enabled.fields()[idx + 1].label,
            "Parole chiave (separate da virgola)"
        );
    }

    #[test]
    fn test_typing_value_keeps_enabled_flag() {
        let forwarding = CallForwarding::default();
        let idx = switch_index(&forwarding, "Presenza di parole chiave specifiche");
        let enabled = updated(forwarding.edit(idx, &EditAction::Toggle));
        let typed = updated(enabled.edit(idx + 1, &EditAction::Insert('d')));
        assert_eq!(
            typed.rule("keywords"),
            Some(&ForwardingRule {
                enabled: true,
                value: "d".to_string()
            })
        );
    }

    #[test]
    fn test_disabling_keeps_value() {
        let mut forwarding = CallForwarding::default();
        forwarding.rules.insert(
            "keywords".to_string(),
            ForwardingRule {
                enabled: true,
                value: "dolore".to_string(),
            },
        );
        let idx = switch_index(&forwarding, "Presenza di parole chiave specifiche");
        let disabled = updated(forwarding.edit(idx, &EditAction::Toggle));
        assert_eq!(
            disabled.rule("keywords"),
            Some(&ForwardingRule {
                enabled: false,
                value: "dolore".to_string()
            })
        );
    }

    #[test]
    fn test_typing_on_switch_is_unchanged() {
        let forwarding = CallForwarding::default();
        assert_eq!(
            forwarding.edit(0, &EditAction::Insert('x')),
            EditOutcome::Unchanged
        );
    }
}

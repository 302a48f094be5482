//! Keyed, ordered collection of indicator functions.

use lexmd_types::{IndicatorEntry, IndicatorValue};
use tracing::{debug, trace};

use crate::{IndicatorInput, frequency, misc, rank};

/// An indicator: a pure function of one document's inputs.
pub type IndicatorFn = fn(&IndicatorInput) -> IndicatorValue;

/// Indicator functions by key, evaluated in registration order.
#[derive(Debug, Clone, Default)]
pub struct IndicatorRegistry {
    entries: Vec<(String, IndicatorFn)>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full catalogue, in report order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("ttr", frequency::ttr);
        registry.register("h", rank::h_point);
        registry.register("r1", rank::r1);
        registry.register("rr", frequency::repeat_rate);
        registry.register("rrmc", frequency::relative_repeat_rate);
        registry.register("hl", frequency::hapax_percentage);
        registry.register("lambda", rank::lambda);
        registry.register("gini", frequency::gini);
        registry.register("r4", rank::r4);
        registry.register("l", rank::curve_length);
        registry.register("r", rank::curve_length_indicator);
        registry.register("entropy", frequency::entropy);
        registry.register("a", rank::adjusted_modulus);
        registry.register("alpha", rank::writers_view);
        registry.register("atl", misc::average_token_length);
        registry.register("vd", misc::verb_distances);
        registry.register("q", misc::activity);
        registry.register("d", misc::descriptivity);
        registry.register("tc", misc::thematic_concentration);
        registry.register("stc", misc::secondary_thematic_concentration);
        registry
    }

    /// Add an indicator. Re-registering a key replaces the function but
    /// keeps its position.
    pub fn register(&mut self, key: impl Into<String>, indicator: IndicatorFn) -> &mut Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = indicator,
            None => self.entries.push((key, indicator)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<IndicatorFn> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, f)| *f)
    }

    /// Evaluate every registered indicator.
    pub fn evaluate(&self, input: &IndicatorInput) -> IndicatorResults {
        self.run(input, |_| true)
    }

    /// Evaluate only the given keys, still in registration order. Unknown
    /// keys are ignored.
    pub fn evaluate_only<S: AsRef<str>>(&self, input: &IndicatorInput, keys: &[S]) -> IndicatorResults {
        self.run(input, |key| keys.iter().any(|k| k.as_ref() == key))
    }

    fn run(&self, input: &IndicatorInput, wanted: impl Fn(&str) -> bool) -> IndicatorResults {
        let entries: Vec<IndicatorEntry> = self
            .entries
            .iter()
            .filter(|(key, _)| wanted(key.as_str()))
            .map(|(key, indicator)| {
                let value = indicator(input);
                trace!(indicator = %key, value = %value, "evaluated indicator");
                IndicatorEntry::new(key.clone(), value)
            })
            .collect();

        debug!(
            evaluated = entries.len(),
            undefined = entries.iter().filter(|e| !e.value.is_defined()).count(),
            "evaluated indicators"
        );

        IndicatorResults {
            curve_signature: input.curve.spectrum_signature().to_string(),
            entries,
        }
    }
}

/// Indicator values for one document, tagged with the curve they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorResults {
    curve_signature: String,
    entries: Vec<IndicatorEntry>,
}

impl IndicatorResults {
    pub fn new(curve_signature: impl Into<String>, entries: Vec<IndicatorEntry>) -> Self {
        Self {
            curve_signature: curve_signature.into(),
            entries,
        }
    }

    pub fn curve_signature(&self) -> &str {
        &self.curve_signature
    }

    pub fn entries(&self) -> &[IndicatorEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<IndicatorEntry> {
        self.entries
    }

    pub fn get(&self, key: &str) -> Option<&IndicatorValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STANDARD_KEYS;
    use crate::fixtures::worked_example;

    #[test]
    fn standard_registry_follows_catalogue_order() {
        let registry = IndicatorRegistry::standard();
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, STANDARD_KEYS);
    }

    #[test]
    fn evaluate_only_keeps_registry_order() {
        let doc = worked_example();
        let results = IndicatorRegistry::standard().evaluate_only(&doc.input(), &["gini", "ttr", "nope"]);
        let keys: Vec<&str> = results.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["ttr", "gini"]);
    }

    #[test]
    fn register_replaces_in_place() {
        fn one(_: &IndicatorInput) -> IndicatorValue {
            IndicatorValue::Defined(1.0)
        }
        let mut registry = IndicatorRegistry::standard();
        registry.register("ttr", one).register("custom", one);
        assert_eq!(registry.len(), STANDARD_KEYS.len() + 1);
        assert_eq!(registry.keys().next(), Some("ttr"));

        let doc = worked_example();
        let results = registry.evaluate(&doc.input());
        assert_eq!(results.get("ttr"), Some(&IndicatorValue::Defined(1.0)));
        assert_eq!(results.get("custom"), Some(&IndicatorValue::Defined(1.0)));
    }

    #[test]
    fn results_carry_curve_signature() {
        let doc = worked_example();
        let results = IndicatorRegistry::standard().evaluate(&doc.input());
        assert_eq!(results.curve_signature(), doc.spectrum.signature());
        assert_eq!(results.entries().len(), STANDARD_KEYS.len());
    }
}

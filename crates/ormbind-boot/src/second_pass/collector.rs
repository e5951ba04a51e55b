//! Collector that queues and processes second passes.

use tracing::debug;

use ormbind_model::ClassMap;

use super::{DependentSecondPass, SecondPass};
use crate::error::MappingError;

/// Queues second passes during the first pass and drains them in order.
///
/// Processing order is fixed: simple-value-type passes first, then
/// dependent passes in topological order, then general passes in
/// registration order. Each queue is emptied by processing.
#[derive(Default)]
pub struct SecondPassCollector {
    simple_value_type_passes: Vec<Box<dyn SecondPass>>,
    dependent_passes: Vec<Box<dyn DependentSecondPass>>,
    general_passes: Vec<Box<dyn SecondPass>>,
}

impl SecondPassCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a simple-value-type pass.
    pub fn add_simple_value_type_pass(&mut self, pass: Box<dyn SecondPass>) {
        self.simple_value_type_passes.push(pass);
    }

    /// Queue a dependent pass.
    pub fn add_dependent_pass(&mut self, pass: Box<dyn DependentSecondPass>) {
        self.dependent_passes.push(pass);
    }

    /// Queue a general pass.
    pub fn add_general_pass(&mut self, pass: Box<dyn SecondPass>) {
        self.general_passes.push(pass);
    }

    /// Number of passes currently queued.
    pub fn pending(&self) -> usize {
        self.simple_value_type_passes.len() + self.dependent_passes.len() + self.general_passes.len()
    }

    /// Drain and execute all queued passes against the mapping model.
    ///
    /// A pass failure aborts processing and propagates; remaining queued
    /// passes are discarded, as the bootstrap cannot continue from a
    /// partially resolved model.
    pub fn process_second_passes(&mut self, classes: &mut ClassMap) -> Result<(), MappingError> {
        debug!(pending = self.pending(), "processing second passes");

        for mut pass in std::mem::take(&mut self.simple_value_type_passes) {
            pass.do_second_pass(classes)?;
        }

        let dependent = topological_sort(std::mem::take(&mut self.dependent_passes))?;
        for mut pass in dependent {
            pass.do_second_pass(classes)?;
        }

        for mut pass in std::mem::take(&mut self.general_passes) {
            pass.do_second_pass(classes)?;
        }

        Ok(())
    }
}

/// Naive O(n^3) topological sort over the dependency predicate.
///
/// Repeatedly extracts a pass that depends on no other unsorted pass; if a
/// round finds none, the remaining passes form a cycle.
fn topological_sort(
    mut to_sort: Vec<Box<dyn DependentSecondPass>>,
) -> Result<Vec<Box<dyn DependentSecondPass>>, MappingError> {
    let mut sorted = Vec::with_capacity(to_sort.len());

    while !to_sort.is_empty() {
        let independent = to_sort.iter().position(|candidate| {
            to_sort.iter().all(|other| {
                candidate.pass_id() == other.pass_id()
                    || !candidate.dependent_upon(other.as_ref())
            })
        });

        match independent {
            Some(idx) => sorted.push(to_sort.remove(idx)),
            None => {
                let remaining: Vec<&str> = to_sort.iter().map(|p| p.pass_id()).collect();
                return Err(MappingError::CyclicDependency(remaining.join(", ")));
            }
        }
    }

    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct RecordingPass {
        id: String,
        log: Log,
    }

    impl RecordingPass {
        fn boxed(id: &str, log: &Log) -> Box<dyn SecondPass> {
            Box::new(Self {
                id: id.to_string(),
                log: Rc::clone(log),
            })
        }
    }

    impl SecondPass for RecordingPass {
        fn do_second_pass(&mut self, _classes: &mut ClassMap) -> Result<(), MappingError> {
            self.log.borrow_mut().push(self.id.clone());
            Ok(())
        }
    }

    struct DependentRecordingPass {
        id: String,
        depends_on: Vec<String>,
        log: Log,
    }

    impl DependentRecordingPass {
        fn boxed(id: &str, depends_on: &[&str], log: &Log) -> Box<dyn DependentSecondPass> {
            Box::new(Self {
                id: id.to_string(),
                depends_on: depends_on.iter().map(|s| s.to_string()).collect(),
                log: Rc::clone(log),
            })
        }
    }

    impl SecondPass for DependentRecordingPass {
        fn do_second_pass(&mut self, _classes: &mut ClassMap) -> Result<(), MappingError> {
            self.log.borrow_mut().push(self.id.clone());
            Ok(())
        }
    }

    impl DependentSecondPass for DependentRecordingPass {
        fn pass_id(&self) -> &str {
            &self.id
        }

        fn dependent_upon(&self, other: &dyn DependentSecondPass) -> bool {
            self.depends_on.iter().any(|dep| dep == other.pass_id())
        }
    }

    #[test]
    fn test_queue_order() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut collector = SecondPassCollector::new();
        let mut classes = ClassMap::new();

        collector.add_general_pass(RecordingPass::boxed("general", &log));
        collector.add_dependent_pass(DependentRecordingPass::boxed("dependent", &[], &log));
        collector.add_simple_value_type_pass(RecordingPass::boxed("simple", &log));

        collector.process_second_passes(&mut classes).unwrap();

        assert_eq!(*log.borrow(), vec!["simple", "dependent", "general"]);
    }

    #[test]
    fn test_dependent_passes_run_in_topological_order() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut collector = SecondPassCollector::new();
        let mut classes = ClassMap::new();

        // Registered in reverse dependency order on purpose.
        collector.add_dependent_pass(DependentRecordingPass::boxed("a", &["b"], &log));
        collector.add_dependent_pass(DependentRecordingPass::boxed("b", &["c"], &log));
        collector.add_dependent_pass(DependentRecordingPass::boxed("c", &[], &log));

        collector.process_second_passes(&mut classes).unwrap();

        assert_eq!(*log.borrow(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_cycle_is_detected() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut collector = SecondPassCollector::new();
        let mut classes = ClassMap::new();

        collector.add_dependent_pass(DependentRecordingPass::boxed("a", &["b"], &log));
        collector.add_dependent_pass(DependentRecordingPass::boxed("b", &["a"], &log));

        let err = collector.process_second_passes(&mut classes).unwrap_err();
        assert!(matches!(err, MappingError::CyclicDependency(_)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_queues_are_drained() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut collector = SecondPassCollector::new();
        let mut classes = ClassMap::new();

        collector.add_simple_value_type_pass(RecordingPass::boxed("once", &log));
        assert_eq!(collector.pending(), 1);

        collector.process_second_passes(&mut classes).unwrap();
        assert_eq!(collector.pending(), 0);

        collector.process_second_passes(&mut classes).unwrap();
        assert_eq!(*log.borrow(), vec!["once"]);
    }
}

//! Ordered validation chains
//!
//! A [`Chain`] is a list of independent checks run in insertion order against
//! one [`Submission`]. The first failing check ends the run and its error is
//! the chain's result; later checks never execute. Handlers run only after
//! [`Chain::run`] returns `Ok`.

use crate::core::error::ApiError;

/// Everything a check may look at: the parsed payload, the route id, and the
/// record bound by the existence lookup (read/update/delete only).
#[derive(Debug)]
pub struct Submission<'a, P, R> {
    pub payload: &'a P,
    pub route_id: Option<&'a str>,
    pub current: Option<&'a R>,
}

impl<'a, P, R> Submission<'a, P, R> {
    /// A submission for a new record (no route id, nothing bound)
    pub fn new(payload: &'a P) -> Self {
        Self {
            payload,
            route_id: None,
            current: None,
        }
    }

    /// A submission against an existing record addressed by `route_id`
    pub fn for_record(payload: &'a P, route_id: &'a str, current: &'a R) -> Self {
        Self {
            payload,
            route_id: Some(route_id),
            current: Some(current),
        }
    }
}

type Check<P, R> =
    Box<dyn for<'a> Fn(&Submission<'a, P, R>) -> Result<(), ApiError> + Send + Sync>;

/// An ordered, short-circuiting list of checks
pub struct Chain<P, R> {
    name: &'static str,
    checks: Vec<Check<P, R>>,
}

impl<P, R> Chain<P, R> {
    /// Create an empty chain. `name` only shows up in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    /// Append a check to the end of the chain
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: for<'a> Fn(&Submission<'a, P, R>) -> Result<(), ApiError> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Append every check of `other`, keeping its order
    pub fn then(mut self, other: Chain<P, R>) -> Self {
        self.checks.extend(other.checks);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order, stopping at the first failure
    pub fn run(&self, submission: &Submission<'_, P, R>) -> Result<(), ApiError> {
        for (step, check) in self.checks.iter().enumerate() {
            if let Err(err) = check(submission) {
                tracing::debug!(
                    chain = self.name,
                    step,
                    status = err.status_code().as_u16(),
                    message = %err,
                    "validation chain rejected request"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<P, R> std::fmt::Debug for Chain<P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("checks", &self.checks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_pass(
        counter: Arc<AtomicUsize>,
    ) -> impl for<'a> Fn(&Submission<'a, u32, ()>) -> Result<(), ApiError> + Send + Sync + 'static
    {
        move |_: &Submission<'_, u32, ()>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_empty_chain_passes() {
        let chain: Chain<u32, ()> = Chain::new("empty");
        assert!(chain.is_empty());
        assert!(chain.run(&Submission::new(&1)).is_ok());
    }

    #[test]
    fn test_all_checks_run_when_passing() {
        let counter = Arc::new(AtomicUsize::new(0));
        let chain = Chain::new("all")
            .check(counting_pass(counter.clone()))
            .check(counting_pass(counter.clone()))
            .check(counting_pass(counter.clone()));

        assert!(chain.run(&Submission::new(&7)).is_ok());
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let counter = Arc::new(AtomicUsize::new(0));
        let chain = Chain::new("short")
            .check(counting_pass(counter.clone()))
            .check(|_: &Submission<'_, u32, ()>| Err(ApiError::Validation("first".into())))
            .check(|_: &Submission<'_, u32, ()>| Err(ApiError::NotFound("second".into())))
            .check(counting_pass(counter.clone()));

        let err = chain.run(&Submission::new(&7)).unwrap_err();
        assert_eq!(err.to_string(), "first");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_checks_see_the_payload() {
        let chain = Chain::new("payload").check(|s: &Submission<'_, u32, ()>| {
            if *s.payload > 10 {
                Ok(())
            } else {
                Err(ApiError::Validation(format!("{} is too small", s.payload)))
            }
        });

        assert!(chain.run(&Submission::new(&11)).is_ok());
        assert_eq!(
            chain.run(&Submission::new(&3)).unwrap_err().to_string(),
            "3 is too small"
        );
    }

    #[test]
    fn test_then_appends_in_order() {
        let first = Chain::new("first")
            .check(|_: &Submission<'_, u32, ()>| Ok(()));
        let second = Chain::new("second")
            .check(|_: &Submission<'_, u32, ()>| Err(ApiError::Validation("from second".into())));

        let chain = first.then(second);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.name(), "first");
        assert_eq!(
            chain.run(&Submission::new(&0)).unwrap_err().to_string(),
            "from second"
        );
    }

    #[test]
    fn test_for_record_binds_route_and_current() {
        let record = String::from("stored");
        let chain = Chain::new("bound").check(|s: &Submission<'_, u32, String>| {
            match (s.route_id, s.current) {
                (Some("r1"), Some(current)) if current == "stored" => Ok(()),
                _ => Err(ApiError::Validation("unbound".into())),
            }
        });

        assert!(chain.run(&Submission::for_record(&0, "r1", &record)).is_ok());
        assert!(chain.run(&Submission::new(&0)).is_err());
    }
}

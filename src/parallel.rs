use crate::error::Result;
use futures::future::join_all;
use std::future::Future;

/// Runs every task concurrently and waits until all of them have settled
///
/// Unlike a fail-fast join, an error in one task never cancels its
/// siblings. The returned results line up with the input order, whatever
/// order the tasks completed in.
pub async fn settle_all<I, F, T>(tasks: I) -> Vec<Result<T>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T>>,
{
    join_all(tasks).await
}

/// Counts the failed entries in a settled batch
pub fn failure_count<T>(results: &[Result<T>]) -> usize {
    results.iter().filter(|result| result.is_err()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use std::pin::Pin;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_results_follow_input_order() {
        let make_task = |duration: u64, value: i32| async move {
            sleep(Duration::from_millis(duration)).await;
            Ok::<_, StatsError>(value)
        };

        let tasks = vec![make_task(100, 1), make_task(10, 2), make_task(50, 3)];
        let results = settle_all(tasks).await;

        let values: Vec<i32> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failure_does_not_cancel_siblings() {
        // Helper to box futures into a common trait-object type
        fn boxed_future(
            fut: impl Future<Output = Result<i32>> + Send + 'static,
        ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send>> {
            Box::pin(fut)
        }

        let tasks = vec![
            boxed_future(async { Ok(1) }),
            boxed_future(async { Err(StatsError::InvalidInvocation("boom".into())) }),
            boxed_future(async {
                sleep(Duration::from_millis(20)).await;
                Ok(3)
            }),
        ];

        let results = settle_all(tasks).await;

        assert_eq!(results.len(), 3);
        assert_eq!(failure_count(&results), 1);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(matches!(results[2], Ok(3)));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let tasks: Vec<std::future::Ready<Result<()>>> = Vec::new();
        assert!(settle_all(tasks).await.is_empty());
    }
}

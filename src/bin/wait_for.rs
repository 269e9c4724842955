use resolver_guard::{ReadinessConfig, ReadinessWaiter, RetryHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ReadinessConfig::from_env();
    println!("Waiting for service to come up on {}", config.target_url);

    let waiter = ReadinessWaiter::new(config)?;
    let progress: RetryHandler = Box::new(|_attempts, _elapsed| {
        println!(".");
    });

    waiter.wait_with_handler(Some(progress)).await?;
    Ok(())
}

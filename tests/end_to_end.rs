//! End-to-end wiring: factory-selected backend driving a small pipeline.
//!
//! Demonstrates the intended composition path without naming any concrete
//! backend type: select by tag, allocate channels, build actors, run,
//! stop. Everything below the factory call goes through the protocol
//! traits only.

use async_trait::async_trait;
use axon_protocol::actor::{Actor, ActorContext};
use axon_protocol::channel::{ChannelConfig, Message, RecvPort, SendPort};
use axon_protocol::error::{ActorError, ChannelError};
use axon_protocol::id::ActorId;
use axon_protocol::infrastructure::{InfraState, MessageInfrastructure};
use axon_protocol::{ActorType, RunCondition};
use axon_runtime::create_message_infrastructure;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Source — emits one message per timestep, then closes its port
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

struct Source {
    steps: u64,
    out: Mutex<Option<Box<dyn SendPort>>>,
}

#[async_trait]
impl Actor for Source {
    async fn run(&self, _ctx: ActorContext) -> Result<(), ActorError> {
        let out = self.out.lock().await.take().expect("source runs once");
        for t in 0..self.steps {
            out.send(Message::new("spikes", json!({ "t": t }))).await?;
        }
        // Dropping the port closes the lane and lets downstream finish.
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Accumulator — sums observed timesteps, reports once upstream closes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

struct Accumulator {
    input: Mutex<Box<dyn RecvPort>>,
    report: Box<dyn SendPort>,
}

#[async_trait]
impl Actor for Accumulator {
    async fn run(&self, _ctx: ActorContext) -> Result<(), ActorError> {
        let mut input = self.input.lock().await;
        let mut sum: u64 = 0;
        loop {
            match input.recv().await {
                Ok(msg) => {
                    sum += msg.payload["t"].as_u64().unwrap_or(0);
                }
                Err(ChannelError::Closed(_)) => break,
                Err(e) => return Err(e.into()),
            }
        }
        self.report
            .send(Message::new("report", json!({ "sum": sum })))
            .await?;
        Ok(())
    }
}

#[tokio::test]
async fn pipeline_runs_under_factory_selected_backend() {
    let cond = RunCondition::steps(10);
    let steps = match cond {
        RunCondition::Steps { num_steps, .. } => num_steps,
        _ => unreachable!(),
    };

    let infra = create_message_infrastructure(ActorType::MultiProcessing).unwrap();
    assert_eq!(infra.state(), InfraState::Stopped);

    let (spike_tx, spike_rx) = infra.channel(ChannelConfig::new("spikes", 16)).unwrap();
    let (report_tx, mut report_rx) = infra.channel(ChannelConfig::new("report", 1)).unwrap();

    infra
        .build_actor(
            ActorId::new("source"),
            Arc::new(Source {
                steps,
                out: Mutex::new(Some(spike_tx)),
            }),
        )
        .await
        .unwrap();
    infra
        .build_actor(
            ActorId::new("accumulator"),
            Arc::new(Accumulator {
                input: Mutex::new(spike_rx),
                report: report_tx,
            }),
        )
        .await
        .unwrap();

    infra.start().await.unwrap();
    assert_eq!(infra.state(), InfraState::Running);

    let report = report_rx.recv().await.unwrap();
    assert_eq!(report.payload, json!({ "sum": 45 }));

    infra.stop().await.unwrap();
    assert_eq!(infra.state(), InfraState::Stopped);
}

//! Scaling Research Engineer Agent
//!
//! This agent simulates the role of a Research Engineer focused on scaling infrastructure
//! for training, evaluation, and deployment at scale across robot fleets.
//!
//! Capabilities:
//! - Design and scale distributed training systems (1000+ GPUs)
//! - Optimize inference throughput in datacenter and edge environments
//! - Handle fault tolerance and experiment tracking
//! - Reduce latency through quantization, distillation, scheduling
//! - Transform prototype systems into production-grade infrastructure

use anyhow::Result;
use std::collections::HashMap;
use the_agency::{Agent, AgentBuilder, AgentConfig};

/// Scaling task types
#[allow(dead_code)]
#[derive(Debug, Clone)]
enum ScalingTask {
    DistributedTraining {
        num_gpus: usize,
        model_type: String,
    },
    InferenceOptimization {
        target_latency_ms: f32,
        deployment: DeploymentType,
    },
    FaultTolerance {
        failure_rate: f32,
        recovery_strategy: String,
    },
    DataPipeline {
        throughput_gbps: f32,
        dataset_size_tb: f32,
    },
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
enum DeploymentType {
    Datacenter,
    Edge,
    Hybrid,
}

/// System metrics for scaling analysis
#[allow(dead_code)]
#[derive(Debug, Clone)]
struct SystemMetrics {
    throughput_samples_per_sec: f32,
    latency_p50_ms: f32,
    latency_p99_ms: f32,
    gpu_utilization: f32,
    memory_bandwidth_gbps: f32,
    cost_per_sample: f32,
}

/// Scaling configuration
#[allow(dead_code)]
#[derive(Debug, Clone)]
struct ScalingConfig {
    num_nodes: usize,
    gpus_per_node: usize,
    batch_size: usize,
    gradient_accumulation_steps: usize,
    mixed_precision: bool,
    distributed_strategy: String,
}

/// Scaling Research Engineer Agent
pub struct ScalingEngineerAgent {
    agent: Agent,
    #[allow(dead_code)]
    experiments: HashMap<String, SystemMetrics>,
}

impl ScalingEngineerAgent {
    pub async fn new(config: AgentConfig) -> Result<Self> {
        let agent = AgentBuilder::new()
            .with_config(config)
            .with_system_prompt(
                "You are an expert Research Engineer specializing in scaling ML systems for robotics. \
                Your expertise includes:\n\
                - Distributed training frameworks (PyTorch FSDP/DDP, DeepSpeed, TorchTitan)\n\
                - Multi-node debugging and experiment management\n\
                - Inference optimization (TensorRT, ONNX Runtime, graph compilers)\n\
                - Quantization strategies (PTQ, QAT, INT8/FP8)\n\
                - CUDA/Triton kernel optimization\n\
                - Hardware features (tensor cores, memory hierarchies)\n\
                - Scaling laws and bottleneck analysis\n\
                - Production ML infrastructure\n\n\
                Provide detailed, technical solutions with code examples. Focus on practical, \
                production-ready approaches that maximize performance and reliability.".to_string()
            )
            .build()
            .await?;

        Ok(Self {
            agent,
            experiments: HashMap::new(),
        })
    }

    /// Design distributed training infrastructure
    pub async fn design_distributed_training(
        &mut self,
        num_gpus: usize,
        model_type: &str,
        dataset_scale: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design a distributed training system with the following requirements:\n\
            - Scale: {} GPUs\n\
            - Model: {}\n\
            - Dataset: {}\n\n\
            Provide:\n\
            1. Distributed strategy selection (FSDP, ZeRO, pipeline parallelism, etc.)\n\
            2. Communication optimization (gradient compression, overlap computation/communication)\n\
            3. Fault tolerance and checkpointing strategy\n\
            4. Experiment tracking and logging infrastructure\n\
            5. Resource provisioning and cost analysis\n\
            6. Python/Rust code example with PyTorch or DeepSpeed\n\
            7. Expected training time and throughput estimates",
            num_gpus, model_type, dataset_scale
        );

        let response = self.agent.process(&prompt).await?;

        println!("🔧 Distributed Training Design:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Optimize inference for datacenter deployment
    pub async fn optimize_datacenter_inference(
        &mut self,
        model_description: &str,
        throughput_target: usize,
    ) -> Result<String> {
        let prompt = format!(
            "Optimize inference for datacenter deployment:\n\
            Model: {}\n\
            Target: {} inferences/second\n\n\
            Provide:\n\
            1. Model optimization (quantization, pruning, distillation)\n\
            2. Graph compiler optimizations (TorchScript, ONNX, TensorRT)\n\
            3. Batching and scheduling strategies\n\
            4. Multi-GPU inference with load balancing\n\
            5. Serving infrastructure (vLLM, TensorRT-LLM, Triton)\n\
            6. Performance profiling and bottleneck analysis\n\
            7. Code example and deployment configuration\n\
            8. Cost per inference calculation",
            model_description, throughput_target
        );

        let response = self.agent.process(&prompt).await?;

        println!("⚡ Datacenter Inference Optimization:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Optimize for edge deployment (on-robot)
    pub async fn optimize_edge_deployment(
        &mut self,
        model_description: &str,
        latency_target_ms: f32,
        hardware_constraints: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Optimize model for edge deployment on robot hardware:\n\
            Model: {}\n\
            Latency target: {:.1}ms\n\
            Hardware: {}\n\n\
            Provide:\n\
            1. Aggressive quantization strategies (INT8, FP16, mixed precision)\n\
            2. Model compression (pruning, knowledge distillation)\n\
            3. Operator fusion and memory optimization\n\
            4. Custom kernel optimization for robot SoC\n\
            5. Power consumption and thermal considerations\n\
            6. Deployment pipeline and OTA updates\n\
            7. Latency breakdown and optimization roadmap\n\
            8. Code example with TensorRT or ONNX Runtime",
            model_description, latency_target_ms, hardware_constraints
        );

        let response = self.agent.process(&prompt).await?;

        println!("🤖 Edge Deployment Optimization:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Design fault-tolerant training system
    #[allow(dead_code)]
    pub async fn design_fault_tolerance(
        &mut self,
        system_scale: &str,
        expected_failure_rate: f32,
    ) -> Result<String> {
        let prompt = format!(
            "Design fault tolerance for large-scale training:\n\
            System scale: {}\n\
            Expected failure rate: {:.2}% per hour\n\n\
            Provide:\n\
            1. Checkpoint strategy (frequency, storage, compression)\n\
            2. Job preemption and resumption\n\
            3. GPU failure detection and node health monitoring\n\
            4. Elastic training (dynamic resource allocation)\n\
            5. Data pipeline resilience\n\
            6. Monitoring and alerting infrastructure\n\
            7. Mean time to recovery (MTTR) analysis\n\
            8. Implementation example with failure injection testing",
            system_scale,
            expected_failure_rate * 100.0
        );

        let response = self.agent.process(&prompt).await?;

        println!("🛡️  Fault Tolerance Design:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Optimize data pipeline for training
    #[allow(dead_code)]
    pub async fn optimize_data_pipeline(
        &mut self,
        dataset_size_tb: f32,
        num_gpus: usize,
        target_throughput: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Optimize data loading pipeline for training:\n\
            Dataset size: {:.1} TB\n\
            GPU count: {}\n\
            Target: {}\n\n\
            Provide:\n\
            1. Data storage strategy (local SSD, distributed FS, object store)\n\
            2. Data preprocessing and augmentation pipeline\n\
            3. Prefetching and caching strategies\n\
            4. Multi-worker data loading\n\
            5. Bottleneck identification (CPU, I/O, network)\n\
            6. Memory-mapped datasets vs streaming\n\
            7. Performance profiling approach\n\
            8. Rust/Python implementation example",
            dataset_size_tb, num_gpus, target_throughput
        );

        let response = self.agent.process(&prompt).await?;

        println!("📊 Data Pipeline Optimization:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Analyze and optimize for scaling laws
    #[allow(dead_code)]
    pub async fn analyze_scaling_laws(
        &mut self,
        model_family: &str,
        current_scale: &str,
        target_scale: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Analyze scaling laws and predict performance:\n\
            Model family: {}\n\
            Current scale: {}\n\
            Target scale: {}\n\n\
            Provide:\n\
            1. Scaling law analysis (compute, data, parameters)\n\
            2. Performance predictions at target scale\n\
            3. Bottleneck identification (compute-bound vs data-bound)\n\
            4. Infrastructure requirements (GPUs, storage, network)\n\
            5. Cost projections\n\
            6. Optimization opportunities\n\
            7. Risk analysis (training instabilities, convergence)\n\
            8. Recommended incremental scaling strategy",
            model_family, current_scale, target_scale
        );

        let response = self.agent.process(&prompt).await?;

        println!("📈 Scaling Laws Analysis:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Profile and optimize CUDA kernels
    #[allow(dead_code)]
    pub async fn optimize_cuda_kernels(
        &mut self,
        operation_description: &str,
        current_performance: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Optimize CUDA/Triton kernels:\n\
            Operation: {}\n\
            Current performance: {}\n\n\
            Provide:\n\
            1. Profiling approach (Nsight Compute, Nsight Systems)\n\
            2. Memory access pattern optimization (coalescing, bank conflicts)\n\
            3. Compute optimization (tensor cores, warp scheduling)\n\
            4. Occupancy analysis and tuning\n\
            5. Triton vs CUDA trade-offs\n\
            6. Kernel fusion opportunities\n\
            7. Code example with performance comparison\n\
            8. Expected speedup and roofline analysis",
            operation_description, current_performance
        );

        let response = self.agent.process(&prompt).await?;

        println!("⚙️  CUDA Kernel Optimization:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }
}

#[tokio::main]
#[allow(dead_code)]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🚀 Scaling Research Engineer Agent Demo");
    println!("{}", "=".repeat(80));
    println!("Role: Scale training, evaluation, and deployment infrastructure\n");

    // Load configuration
    let config = AgentConfig::from_file("config.toml").unwrap_or_else(|_| AgentConfig::default());

    // Create the scaling engineer agent
    let mut agent = ScalingEngineerAgent::new(config).await?;

    // Demo 1: Design distributed training for 1000 GPUs
    println!("\n📋 Task 1: Design Large-Scale Distributed Training");
    println!("{}", "-".repeat(80));

    let _training_design = agent
        .design_distributed_training(
            1024,
            "World model transformer (10B parameters)",
            "1M hours of robot interaction data (~500TB)",
        )
        .await?;

    // Demo 2: Optimize datacenter inference
    println!("\n📋 Task 2: Optimize Datacenter Inference");
    println!("{}", "-".repeat(80));

    let _datacenter_opt = agent
        .optimize_datacenter_inference(
            "Diffusion model for motion planning (2B parameters, 50 denoising steps)",
            10000, // 10K inferences per second
        )
        .await?;

    // Demo 3: Optimize for edge deployment
    println!("\n📋 Task 3: Optimize Edge Deployment");
    println!("{}", "-".repeat(80));

    let _edge_opt = agent
        .optimize_edge_deployment(
            "Real-time robot policy (500M parameters, vision + proprioception)",
            10.0, // 10ms latency
            "NVIDIA Jetson Orin (64 TOPS, 32GB RAM, 15W power budget)",
        )
        .await?;

    // Demo 4: Design fault tolerance
    println!("\n📋 Task 4: Design Fault-Tolerant Training");
    println!("{}", "-".repeat(80));

    let _fault_tolerance = agent
        .design_fault_tolerance(
            "512 GPU cluster (64 nodes × 8 GPUs)",
            0.5, // 0.5% failure rate per hour
        )
        .await?;

    // Demo 5: Optimize data pipeline
    println!("\n📋 Task 5: Optimize Data Pipeline");
    println!("{}", "-".repeat(80));

    let _data_pipeline = agent
        .optimize_data_pipeline(
            500.0, // 500 TB
            256,   // 256 GPUs
            "Saturate 256 GPUs at 40% utilization minimum",
        )
        .await?;

    // Demo 6: Analyze scaling laws
    println!("\n📋 Task 6: Analyze Scaling Laws");
    println!("{}", "-".repeat(80));

    let _scaling_analysis = agent
        .analyze_scaling_laws(
            "Vision-language-action models",
            "1B parameters, 100M data points, 1K GPUs",
            "10B parameters, 1B data points, 8K GPUs",
        )
        .await?;

    // Demo 7: Optimize CUDA kernels
    println!("\n📋 Task 7: Optimize CUDA Kernels");
    println!("{}", "-".repeat(80));

    let _cuda_opt = agent
        .optimize_cuda_kernels(
            "Flash Attention for long context (16K tokens)",
            "120ms per forward pass on A100",
        )
        .await?;

    println!("\n✅ Scaling Research Engineer Agent demonstration complete!");
    println!("{}", "=".repeat(80));
    println!("\n💡 Key capabilities demonstrated:");
    println!("   • Distributed training at massive scale (1000+ GPUs)");
    println!("   • Inference optimization for datacenter and edge");
    println!("   • Fault tolerance and reliability");
    println!("   • Data pipeline optimization");
    println!("   • Scaling laws analysis and prediction");
    println!("   • Low-level kernel optimization");

    Ok(())
}

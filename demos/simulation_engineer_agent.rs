//! Simulation Environment Engineer Agent
//!
//! This agent simulates the role of a Simulation Engineer who designs and builds
//! simulation environments and real-time infrastructure to accelerate robot learning.
//!
//! Capabilities:
//! - Design diverse, physically realistic simulation environments
//! - Bridge sim-to-real gap for robot policies
//! - Scale simulation data production
//! - Prototype virtual robot hardware
//! - Collaborate on training and evaluation tasks

use anyhow::Result;
use the_agency::{Agent, AgentBuilder, AgentConfig};
#[derive(Debug, Clone)]
#[allow(dead_code)]
enum SimulationTask {
    DesignEnvironment {
        description: String,
        requirements: Vec<String>,
    },
    SimToRealGapAnalysis {
        policy_description: String,
    },
    ScaleDataProduction {
        target_samples: usize,
        scenario: String,
    },
    PrototypeHardware {
        hardware_spec: String,
    },
    OptimizePerformance {
        bottleneck: String,
    },
}

/// Simulation environment specification
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct SimEnvironment {
    name: String,
    physics_engine: String,
    render_pipeline: String,
    realism_score: f32,
    performance_metrics: PerformanceMetrics,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct PerformanceMetrics {
    fps: f32,
    latency_ms: f32,
    memory_usage_gb: f32,
}

/// Simulation Engineer Agent
pub struct SimulationEngineerAgent {
    agent: Agent,
    #[allow(dead_code)]
    environments: Vec<SimEnvironment>,
}

impl SimulationEngineerAgent {
    pub async fn new(config: AgentConfig) -> Result<Self> {
        let agent = AgentBuilder::new()
            .with_config(config)
            .with_system_prompt(
                "You are an expert Simulation Engineer for robotics and AI. \
                You design and build physically realistic simulation environments for robot learning. \
                Your expertise includes:\n\
                - Physics simulators (MuJoCo, PyBullet, Isaac Sim)\n\
                - OpenGL rendering pipelines\n\
                - Sim-to-real transfer techniques\n\
                - Performance optimization for large-scale data generation\n\
                - Robot hardware prototyping in simulation\n\
                - Testing practices for simulation correctness\n\n\
                Provide detailed, technical responses with code examples when appropriate.".to_string()
            )
            .build()
            .await?;

        Ok(Self {
            agent,
            environments: vec![],
        })
    }

    /// Design a new simulation environment
    pub async fn design_environment(
        &mut self,
        description: &str,
        requirements: Vec<String>,
    ) -> Result<String> {
        let prompt = format!(
            "Design a physically realistic simulation environment with the following:\n\
            Description: {}\n\
            Requirements:\n{}\n\n\
            Provide:\n\
            1. Environment specification (dimensions, objects, materials)\n\
            2. Physics engine configuration (MuJoCo/PyBullet/Isaac Sim)\n\
            3. Rendering pipeline setup\n\
            4. Expected performance characteristics\n\
            5. Python/Rust code skeleton for implementation",
            description,
            requirements
                .iter()
                .enumerate()
                .map(|(i, r)| format!("  {}. {}", i + 1, r))
                .collect::<Vec<_>>()
                .join("\n")
        );

        let response = self.agent.process(&prompt).await?;

        // Log the environment design
        println!("🏗️  New Environment Designed:");
        println!("{}", "=".repeat(60));
        println!("{}", response);

        Ok(response)
    }

    /// Analyze sim-to-real gap for a policy
    pub async fn analyze_sim_to_real_gap(&mut self, policy_description: &str) -> Result<String> {
        let prompt = format!(
            "Analyze the sim-to-real gap for the following robot policy:\n\
            {}\n\n\
            Provide:\n\
            1. Potential sources of sim-to-real discrepancy\n\
            2. Domain randomization strategies\n\
            3. Reality gap metrics to track\n\
            4. Recommendations for closing the gap\n\
            5. Testing protocol for real robot deployment",
            policy_description
        );

        let response = self.agent.process(&prompt).await?;

        println!("🔍 Sim-to-Real Analysis:");
        println!("{}", "=".repeat(60));
        println!("{}", response);

        Ok(response)
    }

    /// Scale up simulation data production
    #[allow(dead_code)]
    pub async fn scale_data_production(
        &mut self,
        target_samples: usize,
        scenario: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design a system to scale simulation data production:\n\
            - Target: {} samples\n\
            - Scenario: {}\n\n\
            Provide:\n\
            1. Distributed simulation architecture\n\
            2. Data generation pipeline\n\
            3. Quality control and validation\n\
            4. Storage and retrieval strategy\n\
            5. Performance optimization techniques\n\
            6. Resource estimation (CPU/GPU hours, storage)",
            target_samples, scenario
        );

        let response = self.agent.process(&prompt).await?;

        println!("📊 Data Scaling Plan:");
        println!("{}", "=".repeat(60));
        println!("{}", response);

        Ok(response)
    }

    /// Prototype new robot hardware in simulation
    pub async fn prototype_hardware(&mut self, hardware_spec: &str) -> Result<String> {
        let prompt = format!(
            "Prototype the following robot hardware in simulation:\n\
            {}\n\n\
            Provide:\n\
            1. URDF/MJCF model specification\n\
            2. Actuator and sensor models\n\
            3. Collision geometry and inertial properties\n\
            4. Simulation testing protocol\n\
            5. Expected behavior and validation criteria\n\
            6. Code example for loading and testing the model",
            hardware_spec
        );

        let response = self.agent.process(&prompt).await?;

        println!("🤖 Hardware Prototype:");
        println!("{}", "=".repeat(60));
        println!("{}", response);

        Ok(response)
    }

    /// Optimize simulation performance
    #[allow(dead_code)]
    pub async fn optimize_performance(&mut self, bottleneck: &str) -> Result<String> {
        let prompt = format!(
            "Optimize simulation performance for the following bottleneck:\n\
            {}\n\n\
            Provide:\n\
            1. Profiling approach to identify root cause\n\
            2. Optimization strategies (algorithmic and implementation)\n\
            3. Trade-offs between accuracy and speed\n\
            4. Parallelization opportunities\n\
            5. Code examples for optimizations\n\
            6. Expected performance improvements",
            bottleneck
        );

        let response = self.agent.process(&prompt).await?;

        println!("⚡ Performance Optimization:");
        println!("{}", "=".repeat(60));
        println!("{}", response);

        Ok(response)
    }

    /// Generate comprehensive simulation test suite
    #[allow(dead_code)]
    pub async fn generate_test_suite(&mut self, environment_name: &str) -> Result<String> {
        let prompt = format!(
            "Generate a comprehensive test suite for simulation environment: {}\n\n\
            Include:\n\
            1. Physics correctness tests (conservation laws, collision detection)\n\
            2. Rendering validation tests\n\
            3. Performance benchmarks\n\
            4. Determinism and reproducibility tests\n\
            5. Integration tests with robot policies\n\
            6. Rust/Python code examples using common testing frameworks",
            environment_name
        );

        let response = self.agent.process(&prompt).await?;

        println!("🧪 Test Suite:");
        println!("{}", "=".repeat(60));
        println!("{}", response);

        Ok(response)
    }
}

#[tokio::main]
#[allow(dead_code)]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🚀 Simulation Engineer Agent Demo");
    println!("{}", "=".repeat(80));
    println!("Role: Design and build simulation environments for robot learning\n");

    // Load configuration
    let config = AgentConfig::from_file("config.toml").unwrap_or_else(|_| AgentConfig::default());

    // Create the simulation engineer agent
    let mut agent = SimulationEngineerAgent::new(config).await?;

    // Demo 1: Design a home environment for humanoid robot
    println!("\n📋 Task 1: Design Home Environment Simulation");
    println!("{}", "-".repeat(80));

    let _home_design = agent
        .design_environment(
            "Living room environment for humanoid robot training",
            vec![
                "Furniture with realistic physics (sofa, table, chairs)".to_string(),
                "Interactive objects (doors, drawers, appliances)".to_string(),
                "Realistic lighting and textures".to_string(),
                "Support for grasping and manipulation tasks".to_string(),
                "Performance target: 60 FPS with 4 robots".to_string(),
            ],
        )
        .await?;

    // Demo 2: Analyze sim-to-real gap for grasping policy
    println!("\n📋 Task 2: Sim-to-Real Gap Analysis");
    println!("{}", "-".repeat(80));

    let _gap_analysis = agent.analyze_sim_to_real_gap(
        "Deep RL policy for object grasping trained in Isaac Sim using RGB-D input and proprioception. \
        Policy outputs joint position targets at 10Hz."
    ).await?;

    // Demo 3: Scale data production
    println!("\n📋 Task 3: Scale Simulation Data Production");
    println!("{}", "-".repeat(80));

    let _scaling_plan = agent
        .scale_data_production(
            1_000_000,
            "Diverse object manipulation in kitchen environments",
        )
        .await?;

    // Demo 4: Prototype new gripper hardware
    println!("\n📋 Task 4: Prototype New Hardware");
    println!("{}", "-".repeat(80));

    let _hardware_proto = agent
        .prototype_hardware(
            "3-finger adaptive gripper with tactile sensors. \
        Specifications: 3 DOF per finger, force/torque sensors, fingertip cameras.",
        )
        .await?;

    // Demo 5: Optimize rendering performance
    println!("\n📋 Task 5: Performance Optimization");
    println!("{}", "-".repeat(80));

    let _optimization = agent
        .optimize_performance(
            "Rendering pipeline bottleneck when simulating 100+ robots with RGB-D cameras",
        )
        .await?;

    // Demo 6: Generate test suite
    println!("\n📋 Task 6: Generate Test Suite");
    println!("{}", "-".repeat(80));

    let _test_suite = agent.generate_test_suite("home_environment_v1").await?;

    println!("\n✅ Simulation Engineer Agent demonstration complete!");
    println!("{}", "=".repeat(80));

    Ok(())
}

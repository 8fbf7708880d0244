//! Robotics Scientist Agent
//!
//! This agent simulates the role of a Research Scientist specializing in robotics manipulation,
//! reinforcement learning, and autonomous control systems. Focuses on developing and
//! validating intelligent robotic behaviors for complex manipulation tasks.
//!
//! Capabilities:
//! - Reinforcement learning algorithm implementation and optimization
//! - Robotic manipulation research (reach, grasp, pick-and-place)
//! - Simulation environment development and validation
//! - Hyperparameter tuning and experimental design
//! - Performance analysis and benchmarking
//! - Algorithm comparison and evaluation
//! - Real-world validation and sim-to-real transfer

use anyhow::Result;
use the_agency::{Agent, AgentBuilder, AgentConfig};
use tracing::info;

/// Robotics Scientist Agent
pub struct RoboticsScientistAgent {
    agent: Agent,
}

impl RoboticsScientistAgent {
    pub async fn new(config: AgentConfig) -> Result<Self> {
        let agent = AgentBuilder::new()
            .with_config(config)
            .with_system_prompt(
                "You are an expert Research Scientist specializing in robotics manipulation and autonomous control. \
                Your expertise includes:\n\
                - Reinforcement learning algorithms (PPO, SAC, DDPG, TD3)\n\
                - Robotic manipulation research (reach, grasp, pick-and-place, dexterous manipulation)\n\
                - Simulation environments (PyBullet, MuJoCo, Gazebo, Isaac Gym)\n\
                - Hyperparameter optimization and experimental design\n\
                - Performance benchmarking and statistical analysis\n\
                - Sim-to-real transfer and domain adaptation\n\
                - Control theory integration with learning methods\n\
                - Research methodology and scientific validation\n\n\
                Provide detailed, rigorous analysis with experimental evidence, statistical validation, \
                and scientific methodology. Focus on reproducible research, thorough evaluation, \
                and advancing the state-of-the-art in robotic intelligence.".to_string()
            )
            .build()
            .await?;

        Ok(Self { agent })
    }

    /// Design reinforcement learning experiments for robotic manipulation
    pub async fn design_rl_experiment(
        &mut self,
        task_description: &str,
        robotic_platform: &str,
        evaluation_criteria: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design a comprehensive RL experiment for robotic manipulation with the following requirements:\n\
            Task: {}\n\
            Platform: {}\n\
            Evaluation: {}\n\n\
            Provide:\n\
            1. Research hypothesis and experimental objectives\n\
            2. RL algorithm selection rationale (PPO, SAC, etc.)\n\
            3. State and action space design\n\
            4. Reward function engineering (dense vs sparse, shaping strategies)\n\
            5. Simulation environment setup and validation\n\
            6. Baseline comparisons and experimental controls\n\
            7. Performance metrics and statistical analysis plan\n\
            8. Sim-to-real transfer strategy and validation methodology",
            task_description, robotic_platform, evaluation_criteria
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ”¬ RL Experiment Design:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Analyze and optimize RL algorithms for robotic tasks
    pub async fn analyze_rl_algorithm(
        &mut self,
        algorithm_name: &str,
        task_domain: &str,
        performance_bottlenecks: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Analyze and optimize RL algorithm performance for robotic manipulation:\n\
            Algorithm: {}\n\
            Domain: {}\n\
            Issues: {}\n\n\
            Provide:\n\
            1. Algorithm theoretical analysis and suitability assessment\n\
            2. Hyperparameter sensitivity analysis\n\
            3. Sample efficiency evaluation and optimization strategies\n\
            4. Exploration-exploitation balance assessment\n\
            5. Convergence properties and stability analysis\n\
            6. Computational complexity and scaling characteristics\n\
            7. Comparative analysis with alternative algorithms\n\
            8. Optimization recommendations and implementation plan",
            algorithm_name, task_domain, performance_bottlenecks
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ§  RL Algorithm Analysis:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Develop simulation environments for robotic research
    pub async fn develop_simulation_environment(
        &mut self,
        target_task: &str,
        physics_requirements: &str,
        validation_needs: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Develop a simulation environment for robotic research and validation:\n\
            Task: {}\n\
            Physics: {}\n\
            Validation: {}\n\n\
            Provide:\n\
            1. Simulation engine selection (PyBullet, MuJoCo, Gazebo, etc.)\n\
            2. Environment design and scene configuration\n\
            3. Physics parameter tuning and validation\n\
            4. Sensor simulation and noise modeling\n\
            5. Object and robot model development\n\
            6. Real-time performance optimization\n\
            7. Ground truth data collection capabilities\n\
            8. Sim-to-real transfer validation procedures",
            target_task, physics_requirements, validation_needs
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ–¥ï¸  Simulation Environment Development:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Conduct hyperparameter optimization research
    #[allow(dead_code)]
    pub async fn conduct_hyperparameter_optimization(
        &mut self,
        algorithm: &str,
        search_space: &str,
        computational_budget: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design hyperparameter optimization strategy for RL in robotics:\n\
            Algorithm: {}\n\
            Parameters: {}\n\
            Budget: {}\n\n\
            Provide:\n\
            1. Search space analysis and dimensionality reduction\n\
            2. Optimization algorithm selection (grid, random, Bayesian, evolutionary)\n\
            3. Sampling strategy and experimental design\n\
            4. Early stopping criteria and pruning methods\n\
            5. Multi-objective optimization approach\n\
            6. Computational resource allocation\n\
            7. Result analysis and parameter importance ranking\n\
            8. Generalization assessment and transfer learning implications",
            algorithm, search_space, computational_budget
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸŽ¯ Hyperparameter Optimization:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Validate sim-to-real transfer performance
    #[allow(dead_code)]
    pub async fn validate_sim_to_real_transfer(
        &mut self,
        simulation_setup: &str,
        real_world_conditions: &str,
        performance_gap: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Analyze and improve sim-to-real transfer for robotic manipulation:\n\
            Simulation: {}\n\
            Real World: {}\n\
            Gap: {}\n\n\
            Provide:\n\
            1. Reality gap analysis and root cause identification\n\
            2. Domain randomization strategies\n\
            3. Progressive transfer learning approaches\n\
            4. System identification and model calibration\n\
            5. Sensor noise modeling and compensation\n\
            6. Dynamics modeling and parameter estimation\n\
            7. Adaptation and fine-tuning methodologies\n\
            8. Validation protocols and success metrics",
            simulation_setup, real_world_conditions, performance_gap
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ”„ Sim-to-Real Transfer Validation:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Benchmark and compare robotic manipulation algorithms
    #[allow(dead_code)]
    pub async fn benchmark_manipulation_algorithms(
        &mut self,
        algorithms_to_compare: &str,
        benchmark_tasks: &str,
        evaluation_protocol: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design comprehensive benchmarking study for robotic manipulation algorithms:\n\
            Algorithms: {}\n\
            Tasks: {}\n\
            Protocol: {}\n\n\
            Provide:\n\
            1. Benchmark suite design and task selection\n\
            2. Performance metrics and evaluation criteria\n\
            3. Statistical analysis methodology\n\
            4. Fair comparison protocols and controls\n\
            5. Computational resource requirements\n\
            6. Reproducibility and open-source considerations\n\
            7. Result interpretation and practical implications\n\
            8. Future research directions and open problems",
            algorithms_to_compare, benchmark_tasks, evaluation_protocol
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ“Š Algorithm Benchmarking:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Research robotic control integration strategies
    #[allow(dead_code)]
    pub async fn research_control_integration(
        &mut self,
        learning_method: &str,
        traditional_control: &str,
        integration_challenge: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Research integration of learning-based and traditional control methods:\n\
            Learning: {}\n\
            Traditional: {}\n\
            Challenge: {}\n\n\
            Provide:\n\
            1. Control architecture design and hybrid approaches\n\
            2. Stability analysis and convergence guarantees\n\
            3. Safety constraints and fail-safe mechanisms\n\
            4. Performance trade-offs and optimization\n\
            5. Real-time implementation considerations\n\
            6. Robustness to uncertainties and disturbances\n\
            7. Experimental validation methodology\n\
            8. Theoretical foundations and mathematical analysis",
            learning_method, traditional_control, integration_challenge
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸŽ›ï¸  Control Integration Research:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Analyze research reproducibility and methodology
    #[allow(dead_code)]
    pub async fn analyze_research_methodology(
        &mut self,
        research_area: &str,
        current_practices: &str,
        improvement_opportunities: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Analyze research methodology and reproducibility in robotic manipulation:\n\
            Area: {}\n\
            Practices: {}\n\
            Opportunities: {}\n\n\
            Provide:\n\
            1. Current methodological strengths and weaknesses\n\
            2. Reproducibility assessment and barriers\n\
            3. Statistical analysis best practices\n\
            4. Experimental design improvements\n\
            5. Open-source and data sharing strategies\n\
            6. Benchmark standardization approaches\n\
            7. Peer review and validation methodologies\n\
            8. Research community collaboration frameworks",
            research_area, current_practices, improvement_opportunities
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ”¬ Research Methodology Analysis:");
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

    println!("ðŸ”¬ Robotics Scientist Agent Demo");
    println!("{}", "=".repeat(80));
    println!("Role: Research scientist in robotics manipulation and autonomous control\n");

    // Load configuration (use default if config file not found)
    let mut config = AgentConfig::from_file("config.toml").unwrap_or_else(|_| {
        println!("âš ï¸  Config file not found, using defaults");
        AgentConfig::default()
    });

    // Use in-memory database to avoid file system issues
    config.memory.database_url = Some("sqlite::memory:".to_string());
    config.memory.persistent = false;

    // Create the robotics scientist agent
    let mut agent = RoboticsScientistAgent::new(config).await?;

    info!("Agent created successfully with robotics research capabilities");

    // Demonstrate core capabilities
    println!("\nðŸ§ª Robotics Scientist Agent Capabilities:");
    println!("{}", "=".repeat(80));
    println!("â€¢ RL algorithm development and optimization");
    println!("â€¢ Robotic manipulation research and benchmarking");
    println!("â€¢ Simulation environment design and validation");
    println!("â€¢ Hyperparameter optimization and experimental design");
    println!("â€¢ Sim-to-real transfer analysis and improvement");
    println!("â€¢ Control theory integration with learning methods");
    println!("â€¢ Research methodology and reproducibility analysis");
    println!("â€¢ Performance analysis and statistical validation");

    // Example task: Design RL experiment for pick-and-place
    println!("\nðŸ“‹ Example Task: Design RL Experiment for Pick-and-Place");
    println!("{}", "-".repeat(80));

    let _experiment_design = agent
        .design_rl_experiment(
            "Autonomous pick-and-place of various objects using Franka Panda robot",
            "Franka Panda with PyBullet simulation and ROS integration",
            "Success rate >85%, training efficiency, sim-to-real transfer accuracy",
        )
        .await?;

    // Example task: Analyze RL algorithm performance
    println!("\nðŸ“‹ Example Task: Analyze PPO vs SAC Performance");
    println!("{}", "-".repeat(80));

    let _algorithm_analysis = agent
        .analyze_rl_algorithm(
            "Proximal Policy Optimization (PPO) vs Soft Actor-Critic (SAC)",
            "Robotic reach, grasp, and pick-and-place tasks",
            "Sample efficiency, hyperparameter sensitivity, convergence stability",
        )
        .await?;

    // Example task: Develop simulation environment
    println!("\nðŸ“‹ Example Task: Develop Robotic Simulation Environment");
    println!("{}", "-".repeat(80));

    let _simulation_development = agent
        .develop_simulation_environment(
            "Realistic manipulation tasks with physics-based object interactions",
            "Accurate contact dynamics, friction modeling, collision detection",
            "Visual and physics fidelity matching real Franka Panda setup",
        )
        .await?;

    info!("âœ… Robotics Scientist Agent example completed successfully!");
    info!("ðŸ”¬ Agent is ready for advanced robotics research and experimentation");

    Ok(())
}

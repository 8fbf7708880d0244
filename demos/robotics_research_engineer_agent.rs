//! Robotics Research Engineer Agent
//!
//! This agent simulates the role of a Research Engineer focused on robotics design,
//! development, and prototyping. Specializing in mechanical and electrical systems
//! for robotic structures, mechanisms, and integration.
//!
//! Capabilities:
//! - Mechanical and electrical system design and analysis
//! - CAD modeling with SOLIDWORKS, NX, and similar tools
//! - Prototyping processes and materials selection
//! - Failure analysis and testing methodologies
//! - Tolerance analysis and GD&T implementation
//! - Manufacturing support and process optimization
//! - Hands-on assembly and integration testing

use anyhow::Result;
use std::collections::HashMap;
use the_agency::{Agent, AgentBuilder, AgentConfig};

/// Robotics design task types
#[allow(dead_code)]
#[derive(Debug, Clone)]
enum RoboticsTask {
    MechanicalDesign {
        mechanism_type: String,
        payload_kg: f32,
        precision_mm: f32,
    },
    ElectricalDesign {
        power_requirements: String,
        communication_protocol: String,
        safety_rating: String,
    },
    Prototyping {
        material_type: String,
        manufacturing_method: String,
        iteration_count: usize,
    },
    FailureAnalysis {
        failure_mode: String,
        test_conditions: String,
        severity_level: String,
    },
}

/// Design metrics for robotics analysis
#[allow(dead_code)]
#[derive(Debug, Clone)]
struct DesignMetrics {
    weight_kg: f32,
    strength_safety_factor: f32,
    precision_tolerance_mm: f32,
    cost_estimate_usd: f32,
    manufacturing_time_hours: f32,
    reliability_mttf_hours: f32,
}

/// Robotics design configuration
#[allow(dead_code)]
#[derive(Debug, Clone)]
struct RoboticsConfig {
    design_standard: String,
    material_selection: String,
    manufacturing_process: String,
    testing_requirements: String,
    safety_certifications: Vec<String>,
}

/// Robotics Research Engineer Agent
pub struct RoboticsResearchEngineerAgent {
    agent: Agent,
    #[allow(dead_code)]
    designs: HashMap<String, DesignMetrics>,
}

impl RoboticsResearchEngineerAgent {
    pub async fn new(config: AgentConfig) -> Result<Self> {
        let agent = AgentBuilder::new()
            .with_config(config)
            .with_system_prompt(
                "You are an expert Research Engineer specializing in robotics design and development. \
                Your expertise includes:\n\
                - Mechanical design (structures, mechanisms, power transmission)\n\
                - Electrical design (components, systems integration, safety)\n\
                - CAD modeling (SOLIDWORKS, NX, Creo, geometric dimensioning & tolerancing)\n\
                - Prototyping (materials selection, manufacturing processes, iteration)\n\
                - Failure analysis (test fixtures, data analysis, design refinement)\n\
                - Tolerance analysis (stack-up calculations, GD&T, reliability)\n\
                - Manufacturing support (DFM, process optimization, quality control)\n\
                - Hands-on assembly (sub-assemblies, system integration, testing)\n\n\
                Provide detailed, technical solutions with specifications, calculations, and practical \
                implementation guidance. Focus on manufacturable, reliable, and cost-effective designs \
                that balance performance, ergonomics, and safety requirements.".to_string()
            )
            .build()
            .await?;

        Ok(Self {
            agent,
            designs: HashMap::new(),
        })
    }

    /// Design mechanical system for robotics
    pub async fn design_mechanical_system(
        &mut self,
        mechanism_description: &str,
        payload_capacity: f32,
        operating_environment: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design a mechanical system for robotics with the following requirements:\n\
            Mechanism: {}\n\
            Payload capacity: {:.1} kg\n\
            Operating environment: {}\n\n\
            Provide:\n\
            1. Mechanical design specifications (materials, dimensions, tolerances)\n\
            2. Structural analysis (FEA, stress calculations, safety factors)\n\
            3. Mechanism design (kinematics, dynamics, power transmission)\n\
            4. CAD modeling approach and key features\n\
            5. Manufacturing considerations (DFM, assembly sequence)\n\
            6. Testing and validation strategy\n\
            7. Cost analysis and optimization opportunities\n\
            8. Detailed drawings/sketches description and GD&T callouts",
            mechanism_description, payload_capacity, operating_environment
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ”§ Mechanical System Design:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Design electrical system for robotics
    pub async fn design_electrical_system(
        &mut self,
        power_requirements: &str,
        control_interfaces: &str,
        safety_requirements: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design an electrical system for robotics with the following requirements:\n\
            Power requirements: {}\n\
            Control interfaces: {}\n\
            Safety requirements: {}\n\n\
            Provide:\n\
            1. Electrical architecture (power distribution, control systems)\n\
            2. Component selection (motors, sensors, controllers, power supplies)\n\
            3. Circuit design and schematics\n\
            4. Communication protocols and interfaces\n\
            5. Safety systems (emergency stops, fault detection, isolation)\n\
            6. Thermal management and power efficiency\n\
            7. EMI/EMC considerations and mitigation\n\
            8. Testing procedures and validation criteria",
            power_requirements, control_interfaces, safety_requirements
        );

        let response = self.agent.process(&prompt).await?;

        println!("âš¡ Electrical System Design:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Develop prototyping strategy
    pub async fn develop_prototyping_strategy(
        &mut self,
        component_description: &str,
        iteration_goals: &str,
        timeline_constraints: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Develop a prototyping strategy for robotics component:\n\
            Component: {}\n\
            Goals: {}\n\
            Timeline: {}\n\n\
            Provide:\n\
            1. Material selection rationale and alternatives\n\
            2. Manufacturing process selection (CNC, 3D printing, casting, etc.)\n\
            3. Design for prototyping considerations\n\
            4. Iteration planning and testing milestones\n\
            5. Cost estimation and budget allocation\n\
            6. Risk assessment and mitigation strategies\n\
            7. Quality control and validation methods\n\
            8. Transition plan to production manufacturing",
            component_description, iteration_goals, timeline_constraints
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ”¨ Prototyping Strategy:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Conduct failure analysis
    pub async fn conduct_failure_analysis(
        &mut self,
        failure_description: &str,
        test_conditions: &str,
        data_available: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Conduct failure analysis for robotics component:\n\
            Failure: {}\n\
            Test conditions: {}\n\
            Available data: {}\n\n\
            Provide:\n\
            1. Failure mode identification and classification\n\
            2. Root cause analysis methodology\n\
            3. Test fixture design for reproduction\n\
            4. Data collection and measurement strategy\n\
            5. Analysis techniques (FMEA, statistical methods, simulation)\n\
            6. Design recommendations and corrective actions\n\
            7. Validation testing plan\n\
            8. Preventive measures for similar failures",
            failure_description, test_conditions, data_available
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ” Failure Analysis:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Perform tolerance analysis
    #[allow(dead_code)]
    pub async fn perform_tolerance_analysis(
        &mut self,
        assembly_description: &str,
        precision_requirements: &str,
        manufacturing_capabilities: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Perform tolerance analysis for robotics assembly:\n\
            Assembly: {}\n\
            Precision requirements: {}\n\
            Manufacturing capabilities: {}\n\n\
            Provide:\n\
            1. Tolerance stack-up analysis methodology\n\
            2. GD&T feature control frames and datums\n\
            3. Statistical tolerance analysis (RSS, Monte Carlo)\n\
            4. Manufacturing process capability assessment\n\
            5. Cost-benefit analysis of tolerance tightening\n\
            6. Measurement and inspection strategy\n\
            7. Design optimization recommendations\n\
            8. Quality control implementation plan",
            assembly_description, precision_requirements, manufacturing_capabilities
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ“ Tolerance Analysis:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Design manufacturing process
    #[allow(dead_code)]
    pub async fn design_manufacturing_process(
        &mut self,
        component_description: &str,
        production_volume: &str,
        quality_requirements: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design manufacturing process for robotics component:\n\
            Component: {}\n\
            Production volume: {}\n\
            Quality requirements: {}\n\n\
            Provide:\n\
            1. Process selection (injection molding, CNC, sheet metal, etc.)\n\
            2. Tooling and fixture design\n\
            3. Process parameter optimization\n\
            4. Quality control and inspection methods\n\
            5. Cost analysis and yield optimization\n\
            6. Supply chain considerations\n\
            7. Scalability assessment\n\
            8. Implementation timeline and resource requirements",
            component_description, production_volume, quality_requirements
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ­ Manufacturing Process Design:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Optimize system integration
    #[allow(dead_code)]
    pub async fn optimize_system_integration(
        &mut self,
        subsystem_descriptions: &str,
        integration_challenges: &str,
        performance_targets: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Optimize system integration for robotics platform:\n\
            Subsystems: {}\n\
            Integration challenges: {}\n\
            Performance targets: {}\n\n\
            Provide:\n\
            1. Integration architecture and interfaces\n\
            2. Mechanical integration (mounting, alignment, thermal)\n\
            3. Electrical integration (power, signals, grounding)\n\
            4. Software integration (communication protocols, APIs)\n\
            5. Testing and validation strategy\n\
            6. Performance optimization and trade-offs\n\
            7. Reliability and maintainability considerations\n\
            8. Documentation and training requirements",
            subsystem_descriptions, integration_challenges, performance_targets
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ”— System Integration Optimization:");
        println!("{}", "=".repeat(70));
        println!("{}", response);

        Ok(response)
    }

    /// Design test methodology
    #[allow(dead_code)]
    pub async fn design_test_methodology(
        &mut self,
        component_system: &str,
        test_objectives: &str,
        environmental_conditions: &str,
    ) -> Result<String> {
        let prompt = format!(
            "Design comprehensive test methodology:\n\
            Component/System: {}\n\
            Test objectives: {}\n\
            Environmental conditions: {}\n\n\
            Provide:\n\
            1. Test plan structure and test cases\n\
            2. Test fixture and equipment design\n\
            3. Measurement and data acquisition systems\n\
            4. Environmental testing (temperature, vibration, humidity)\n\
            5. Performance testing (load, speed, accuracy)\n\
            6. Safety and reliability testing\n\
            7. Data analysis and reporting methodology\n\
            8. Test automation and efficiency improvements",
            component_system, test_objectives, environmental_conditions
        );

        let response = self.agent.process(&prompt).await?;

        println!("ðŸ§ª Test Methodology Design:");
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

    println!("ðŸ¤– Robotics Research Engineer Agent Demo");
    println!("{}", "=".repeat(80));
    println!("Role: Design, prototype, and validate robotics systems\n");

    // Load configuration
    let config = AgentConfig::from_file("config.toml").unwrap_or_else(|_| AgentConfig::default());

    // Create the robotics research engineer agent
    let mut agent = RoboticsResearchEngineerAgent::new(config).await?;

    // Demo 1: Design mechanical system
    println!("\nðŸ“‹ Task 1: Design Robotic Arm Mechanism");
    println!("{}", "-".repeat(80));

    let _mechanical_design = agent
        .design_mechanical_system(
            "6-DOF articulated robotic arm for industrial assembly",
            5.0, // 5kg payload
            "Clean room ISO Class 5, temperature 20-25Â°C, humidity 40-60%",
        )
        .await?;

    // Demo 2: Design electrical system
    println!("\nðŸ“‹ Task 2: Design Electrical Control System");
    println!("{}", "-".repeat(80));

    let _electrical_design = agent
        .design_electrical_system(
            "48V DC, 500W peak power, battery backup",
            "EtherCAT communication, 1ms cycle time, safety PLC integration",
            "SIL 2 safety rating, emergency stop circuits, fault monitoring",
        )
        .await?;

    // Demo 3: Develop prototyping strategy
    println!("\nðŸ“‹ Task 3: Develop Prototyping Strategy");
    println!("{}", "-".repeat(80));

    let _prototyping_strategy = agent
        .develop_prototyping_strategy(
            "Custom end-effector with force sensing and tool changing",
            "Validate grasping force accuracy Â±0.1N, tool change reliability >99.9%",
            "4 weeks to first prototype, 8 weeks to validated design",
        )
        .await?;

    // Demo 4: Conduct failure analysis
    println!("\nðŸ“‹ Task 4: Conduct Failure Analysis");
    println!("{}", "-".repeat(80));

    let _failure_analysis = agent
        .conduct_failure_analysis(
            "Gear backlash increasing by 0.5mm over 1000 cycles",
            "Load: 50Nm, Speed: 100 RPM, Temperature: 40Â°C, Lubrication: synthetic oil",
            "Torque measurements, vibration data, thermal imaging, metallurgical samples",
        )
        .await?;

    // Demo 5: Perform tolerance analysis
    println!("\nðŸ“‹ Task 5: Perform Tolerance Analysis");
    println!("{}", "-".repeat(80));

    let _tolerance_analysis = agent
        .perform_tolerance_analysis(
            "Precision linear actuator with Â±0.01mm positioning accuracy",
            "CNC machining Â±0.005mm, injection molding Â±0.02mm, assembly Â±0.01mm",
            "Target: 6Ïƒ capability, Cpk > 1.33, reject rate < 100 ppm",
        )
        .await?;

    // Demo 6: Design manufacturing process
    println!("\nðŸ“‹ Task 6: Design Manufacturing Process");
    println!("{}", "-".repeat(80));

    let _manufacturing_design = agent
        .design_manufacturing_process(
            "Aluminum robotic link with integrated bearings and sensors",
            "Initial production: 1000 units/month, scaling to 10000 units/month",
            "Dimensional accuracy Â±0.05mm, surface finish Ra 1.6Î¼m, assembly yield >98%",
        )
        .await?;

    // Demo 7: Optimize system integration
    println!("\nðŸ“‹ Task 7: Optimize System Integration");
    println!("{}", "-".repeat(80));

    let _system_integration = agent
        .optimize_system_integration(
            "Vision system, force sensors, motion controllers, safety PLC",
            "Cable management, thermal dissipation, vibration isolation, EMI shielding",
            "Cycle time <500ms, positioning accuracy Â±0.1mm, reliability >99.5%",
        )
        .await?;

    // Demo 8: Design test methodology
    println!("\nðŸ“‹ Task 8: Design Test Methodology");
    println!("{}", "-".repeat(80));

    let _test_methodology = agent
        .design_test_methodology(
            "Complete robotic assembly station with 6-axis robot and end-effector",
            "Validate positioning accuracy, cycle time, force control, safety systems",
            "Temperature range -10Â°C to +50Â°C, vibration 10-1000Hz 10g, humidity 10-90%",
        )
        .await?;

    println!("\nâœ… Robotics Research Engineer Agent demonstration complete!");
    println!("{}", "=".repeat(80));
    println!("\nðŸ’¡ Key capabilities demonstrated:");
    println!("   â€¢ Mechanical design and structural analysis");
    println!("   â€¢ Electrical system architecture and safety");
    println!("   â€¢ Prototyping strategy and iteration planning");
    println!("   â€¢ Failure analysis and root cause identification");
    println!("   â€¢ Tolerance analysis and GD&T implementation");
    println!("   â€¢ Manufacturing process design and optimization");
    println!("   â€¢ System integration and testing methodology");
    println!("   â€¢ Hands-on assembly and validation procedures");

    Ok(())
}
//! Static reference data for the dashboard.
//!
//! Compiled-in lookup tables: capability cards, industry solutions, the
//! agent seed list, pricing tiers, and navigation sections. The state layer
//! consumes these read-only; nothing here mutates at runtime.

use crate::telemetry::{Agent, AgentStatus};

/// One capability card in the platform grid.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    pub title: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
}

/// One industry solution entry, keyed by `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub highlights: [&'static str; 3],
}

/// One node in the orchestration workflow strip.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowNode {
    pub title: &'static str,
    pub kind: &'static str,
    pub active: bool,
}

/// One pricing tier. `None` prices render as "Custom".
#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly: Option<u32>,
    pub annual: Option<u32>,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

/// Navigation anchors, in page order.
pub const NAV_SECTIONS: [&str; 4] = ["Platform", "Solutions", "Industries", "Pricing"];

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Autonomous Reasoning",
        icon: "cpu",
        desc: "Advanced LLM-driven logic for complex multi-step decision making without human intervention.",
    },
    Capability {
        title: "Enterprise Security",
        icon: "shield",
        desc: "SOC2 Type II compliant infrastructure with end-to-end encryption for all agent communications.",
    },
    Capability {
        title: "Native Integrations",
        icon: "layers",
        desc: "Direct connectors for Salesforce, SAP, and custom internal SQL/NoSQL databases.",
    },
    Capability {
        title: "Vector Knowledge",
        icon: "database",
        desc: "Real-time RAG (Retrieval-Augmented Generation) synced with your organization's internal documentation.",
    },
    Capability {
        title: "Identity Vault",
        icon: "fingerprint",
        desc: "Secure credential management for agents to interact safely with legacy authentication systems.",
    },
    Capability {
        title: "Scalable Infrastructure",
        icon: "globe",
        desc: "Globally distributed nodes ensuring sub-50ms latency for real-time agent responses.",
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Finance",
        icon: "briefcase",
        title: "Financial Intelligence Suite",
        desc: "Automate complex risk assessments, fraud detection, and regulatory reporting.",
        highlights: [
            "Real-time anomaly detection",
            "Automated SEC compliance filing",
            "Predictive portfolio rebalancing",
        ],
    },
    Industry {
        name: "Healthcare",
        icon: "stethoscope",
        title: "Medical Compliance AI",
        desc: "Securely handle HIPAA-regulated data flows and patient orchestration.",
        highlights: [
            "Data anonymization",
            "Audit log automation",
            "Patient flow prediction",
        ],
    },
    Industry {
        name: "E-Commerce",
        icon: "cart",
        title: "Marketplace Optimization",
        desc: "Drive customer retention with intelligent supply chain and personalized agentic support.",
        highlights: [
            "Dynamic pricing engines",
            "Inventory replenishment",
            "AI concierge services",
        ],
    },
    Industry {
        name: "Logistics",
        icon: "truck",
        title: "Supply Chain Autonomy",
        desc: "Real-time route optimization and automated carrier communication.",
        highlights: [
            "Route efficiency analysis",
            "Automated dispatching",
            "Sensor-driven maintenance",
        ],
    },
];

pub const WORKFLOW_NODES: &[WorkflowNode] = &[
    WorkflowNode {
        title: "Ingress",
        kind: "Webhooks",
        active: true,
    },
    WorkflowNode {
        title: "Logic",
        kind: "Vector Search",
        active: true,
    },
    WorkflowNode {
        title: "Action",
        kind: "AI Agent V4",
        active: true,
    },
    WorkflowNode {
        title: "Review",
        kind: "Human Oversight",
        active: false,
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        monthly: Some(499),
        annual: Some(399),
        features: &["5 Active Agents", "Basic Analytics"],
        highlight: false,
    },
    PricingTier {
        name: "Professional",
        monthly: Some(1299),
        annual: Some(1039),
        features: &["20 Active Agents", "Advanced Analytics"],
        highlight: true,
    },
    PricingTier {
        name: "Enterprise",
        monthly: None,
        annual: None,
        features: &["Unlimited Agents", "Full Orchestration"],
        highlight: false,
    },
];

/// The fixed agent roster the telemetry simulator starts from.
pub fn agent_seed() -> Vec<Agent> {
    vec![
        Agent {
            id: 1,
            name: "FinAnalyze-Alpha".into(),
            kind: "Financial Intelligence".into(),
            status: AgentStatus::Active,
            efficiency: Some("98.2%".into()),
            tasks: 1240,
        },
        Agent {
            id: 2,
            name: "HealthGuard-A1".into(),
            kind: "Compliance Monitoring".into(),
            status: AgentStatus::Training,
            efficiency: None,
            tasks: 0,
        },
        Agent {
            id: 3,
            name: "OpsFlow-V2".into(),
            kind: "Supply Chain Opt".into(),
            status: AgentStatus::Active,
            efficiency: Some("94.5%".into()),
            tasks: 842,
        },
        Agent {
            id: 4,
            name: "SupportBot-Pro".into(),
            kind: "Customer Experience".into(),
            status: AgentStatus::Paused,
            efficiency: Some("91.0%".into()),
            tasks: 3201,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industries_have_unique_names() {
        for (i, a) in INDUSTRIES.iter().enumerate() {
            for b in &INDUSTRIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn agent_seed_ids_are_unique_and_ordered() {
        let seed = agent_seed();
        let ids: Vec<u32> = seed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn priced_tiers_discount_annual_billing() {
        for tier in PRICING_TIERS {
            if let (Some(monthly), Some(annual)) = (tier.monthly, tier.annual) {
                assert!(annual < monthly, "{} annual price not discounted", tier.name);
            }
        }
    }
}

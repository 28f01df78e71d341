//! The agent invocation payload.
//!
//! The backend takes a single JSON body for every turn. Most of it is
//! fixed configuration; the per-turn parts are the prompt, the session
//! id, and the associated files.

use serde::Serialize;

use crate::config::Config;

/// First message of a fresh session, sent automatically once.
pub const KICKOFF_PROMPT: &str = "start shapeconnect requirement gathering from scratch";

/// Header naming the calling module, used for backend routing.
pub const MODULE_HEADER: &str = "x-module";
pub const MODULE_NAME: &str = "shapeconnect-assessment";

const MODEL_ID: &str = "us.anthropic.claude-haiku-4-5-20251001-v1:0";
const REGION: &str = "us-east-1";
const BUCKET_NAME: &str = "local-aihouse";
const CONVERSATION_PREFIX: &str = "local-shapeconnect-documents/";
const AGENT_INSTRUCTIONS: &str = "You are a ShapeConnect Technology Assessment requirement gathering Agent focused on understanding business technology needs, current systems, and operational workflows. Use the ShapeConnect assessment instructions from Shapeconnect_agent_instruction_ver_1.txt";

#[derive(Debug, Clone, Serialize)]
pub struct InvokeRequest {
    pub prompt: String,
    pub enable_thinking: bool,
    pub multi_agent: bool,
    pub session_id: String,
    pub visual_output: bool,
    pub enable_knowledgebase: bool,
    pub agent_config: AgentConfig,
    pub s3: S3Config,
    pub telemetry_config: TelemetryConfig,
    pub agent_state: AgentState,
    pub s3_conversation_config: ConversationConfig,
    pub kb_details: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentConfig {
    pub main: ModelSettings,
    pub collaborator: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelSettings {
    pub name: String,
    pub model_id: String,
    pub region: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub thinking_max_tokens: u32,
    pub mcp_config: Vec<McpConfig>,
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct McpConfig {
    pub mcp_url: String,
    pub mcp_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct S3Config {
    pub bucket_name: String,
    pub region: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TelemetryConfig {
    pub zipkin_endpoint: String,
    pub telemetry_enabled: bool,
    pub service_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentState {
    pub associated_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationConfig {
    pub sliding_window_size: u32,
    pub prefix: String,
}

impl InvokeRequest {
    /// Build the payload for one turn.
    pub fn new(
        config: &Config,
        prompt: String,
        session_id: String,
        associated_files: Vec<String>,
    ) -> Self {
        Self {
            prompt,
            enable_thinking: false,
            multi_agent: false,
            session_id,
            visual_output: false,
            enable_knowledgebase: false,
            agent_config: AgentConfig {
                main: ModelSettings {
                    name: "mainAgent".to_string(),
                    model_id: MODEL_ID.to_string(),
                    region: REGION.to_string(),
                    temperature: 0.3,
                    top_p: 0.95,
                    max_tokens: 0,
                    thinking_max_tokens: 8000,
                    mcp_config: vec![McpConfig {
                        mcp_url: String::new(),
                        mcp_type: String::new(),
                    }],
                    instructions: AGENT_INSTRUCTIONS.to_string(),
                },
                collaborator: Vec::new(),
            },
            s3: S3Config {
                bucket_name: BUCKET_NAME.to_string(),
                region: REGION.to_string(),
            },
            telemetry_config: TelemetryConfig {
                zipkin_endpoint: String::new(),
                telemetry_enabled: false,
                service_name: String::new(),
            },
            agent_state: AgentState { associated_files },
            s3_conversation_config: ConversationConfig {
                sliding_window_size: config.sliding_window_size,
                prefix: CONVERSATION_PREFIX.to_string(),
            },
            kb_details: Vec::new(),
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tool call made by the agent while producing a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    /// The name of the tool that was called
    pub name: String,
    /// The arguments the tool was called with
    #[serde(default)]
    pub input: Map<String, Value>,
}

/// The result of executing a tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    pub output: Value,
    #[serde(default)]
    pub is_error: bool,
}

/// A tool call paired with its output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    pub tool_call: ToolCall,
    pub tool_output: ToolOutput,
}

impl ToolData {
    pub fn new(tool_call: ToolCall, tool_output: ToolOutput) -> Self {
        ToolData {
            tool_call,
            tool_output,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tool_output.is_error
    }
}

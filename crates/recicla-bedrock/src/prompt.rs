//! Prompt assembly for the recyclable-material analysis assistant.
//!
//! The final prompt is a single text block:
//!
//! ```text
//! <system instruction>
//!
//! Histórico da conversa:
//! User: ...
//! Assistant: ...
//!
//! <context>Usuário: <message>
//!
//! Assistente:
//! ```
//!
//! The history block is omitted when there is no history. Only the last
//! [`HISTORY_WINDOW`] turns are rendered.

use recicla_core::models::conversation::{ConversationTurn, TurnRole, recent_turns};
use serde::{Deserialize, Serialize};

pub use recicla_core::models::conversation::HISTORY_WINDOW;

/// Default instruction: identify recyclable objects in an image and answer
/// with a JSON list only.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"
    Você é um robô especialista em analisar imagens de materiais recicláveis.
    Ao receber uma imagem, observe atentamente todos os detalhes visuais (formas, cores, texturas e tamanhos)
    para identificar corretamente os materiais presentes.
    
    Regras:
      - Retorne uma lista de itens, onde cada item é um objeto JSON com as chaves "Tipo de objeto", "Tipo de material" e "Quantidade".
      - Utilize nomes simples e padronizados para os objetos, por exemplo, "garrafa plástica", "lata", etc.
      - Informe a quantidade EXATA detectada para cada objeto na imagem.
      - Retorne somente o material externo de cada obejto, não o conteúdo interno.
      
    Exemplo de saída:
    [
      {
        "Tipo de objeto": "garrafa plástica",
        "Tipo de material": "PET",
        "Quantidade": 3
      },
      {
        "Tipo de objeto": "lata",
        "Tipo de material": "Vidro",
        "Quantidade": 1
      }
    ]
    
    Por favor, processe a imagem conforme descrito e retorne apenas o JSON, sem nenhum texto adicional.
    "#;

/// Everything about the prompt text that a deployment may want to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub system_instruction: String,
    /// Line introducing the rendered history, including its newline.
    pub history_heading: String,
    pub history_user_label: String,
    pub history_assistant_label: String,
    pub user_label: String,
    pub assistant_label: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            history_heading: "Histórico da conversa:\n".to_string(),
            history_user_label: "User".to_string(),
            history_assistant_label: "Assistant".to_string(),
            user_label: "Usuário".to_string(),
            assistant_label: "Assistente".to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    fn history_label(&self, role: TurnRole) -> &str {
        match role {
            TurnRole::User => &self.history_user_label,
            TurnRole::Assistant => &self.history_assistant_label,
        }
    }
}

/// Assemble the full prompt for one user message.
///
/// Pure: the same inputs always give the same output.
pub fn build_prompt(
    template: &PromptTemplate,
    user_message: &str,
    history: &[ConversationTurn],
    context: Option<&str>,
) -> String {
    let mut prompt = String::with_capacity(
        template.system_instruction.len() + user_message.len() + context.map_or(0, str::len) + 64,
    );

    prompt.push_str(&template.system_instruction);
    prompt.push_str("\n\n");
    prompt.push_str(&render_history(template, history));
    prompt.push_str(context.unwrap_or_default());
    prompt.push_str(&format!(
        "{}: {user_message}\n\n{}:",
        template.user_label, template.assistant_label
    ));

    prompt
}

/// Render the recent history block, or an empty string if there is none.
pub fn render_history(template: &PromptTemplate, history: &[ConversationTurn]) -> String {
    if history.is_empty() {
        return String::new();
    }

    let mut block = template.history_heading.clone();
    for turn in recent_turns(history) {
        block.push_str(template.history_label(turn.role));
        block.push_str(": ");
        block.push_str(&turn.content);
        block.push('\n');
    }
    block.push('\n');
    block
}

//! The mapping table between gateway operations and Retell REST endpoints.

use std::fmt;

use http::Method;

/// Entity types exposed by the Retell API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Agent,
    Call,
    PhoneNumber,
    Voice,
    Llm,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Call => "call",
            Self::PhoneNumber => "phone_number",
            Self::Voice => "voice",
            Self::Llm => "llm",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Retrieve,
    List,
    Update,
    Delete,
}

/// One upstream operation. Calls have no update/delete and voices are read-only,
/// because Retell does not offer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreatePhoneCall,
    CreateWebCall,
    GetCall,
    ListCalls,

    CreateAgent,
    GetAgent,
    ListAgents,
    UpdateAgent,
    DeleteAgent,

    CreatePhoneNumber,
    GetPhoneNumber,
    ListPhoneNumbers,
    UpdatePhoneNumber,
    DeletePhoneNumber,

    GetVoice,
    ListVoices,

    CreateLlm,
    GetLlm,
    ListLlms,
    UpdateLlm,
    DeleteLlm,
}

impl Operation {
    pub const ALL: [Operation; 21] = [
        Self::CreatePhoneCall,
        Self::CreateWebCall,
        Self::GetCall,
        Self::ListCalls,
        Self::CreateAgent,
        Self::GetAgent,
        Self::ListAgents,
        Self::UpdateAgent,
        Self::DeleteAgent,
        Self::CreatePhoneNumber,
        Self::GetPhoneNumber,
        Self::ListPhoneNumbers,
        Self::UpdatePhoneNumber,
        Self::DeletePhoneNumber,
        Self::GetVoice,
        Self::ListVoices,
        Self::CreateLlm,
        Self::GetLlm,
        Self::ListLlms,
        Self::UpdateLlm,
        Self::DeleteLlm,
    ];

    pub fn resource(&self) -> Resource {
        match self {
            Self::CreatePhoneCall | Self::CreateWebCall | Self::GetCall | Self::ListCalls => {
                Resource::Call
            }
            Self::CreateAgent
            | Self::GetAgent
            | Self::ListAgents
            | Self::UpdateAgent
            | Self::DeleteAgent => Resource::Agent,
            Self::CreatePhoneNumber
            | Self::GetPhoneNumber
            | Self::ListPhoneNumbers
            | Self::UpdatePhoneNumber
            | Self::DeletePhoneNumber => Resource::PhoneNumber,
            Self::GetVoice | Self::ListVoices => Resource::Voice,
            Self::CreateLlm | Self::GetLlm | Self::ListLlms | Self::UpdateLlm | Self::DeleteLlm => {
                Resource::Llm
            }
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::CreatePhoneCall
            | Self::CreateWebCall
            | Self::CreateAgent
            | Self::CreatePhoneNumber
            | Self::CreateLlm => OperationKind::Create,
            Self::GetCall
            | Self::GetAgent
            | Self::GetPhoneNumber
            | Self::GetVoice
            | Self::GetLlm => OperationKind::Retrieve,
            Self::ListCalls
            | Self::ListAgents
            | Self::ListPhoneNumbers
            | Self::ListVoices
            | Self::ListLlms => OperationKind::List,
            Self::UpdateAgent | Self::UpdatePhoneNumber | Self::UpdateLlm => OperationKind::Update,
            Self::DeleteAgent | Self::DeletePhoneNumber | Self::DeleteLlm => OperationKind::Delete,
        }
    }

    /// Upstream path, relative to the base URL. Identifiers are appended as
    /// one extra segment for retrieve, update and delete.
    pub fn path(&self) -> &'static str {
        match self {
            Self::CreatePhoneCall => "/v2/create-phone-call",
            Self::CreateWebCall => "/v2/create-web-call",
            Self::GetCall => "/v2/get-call",
            Self::ListCalls => "/v2/list-calls",

            Self::CreateAgent => "/create-agent",
            Self::GetAgent => "/get-agent",
            Self::ListAgents => "/list-agents",
            Self::UpdateAgent => "/update-agent",
            Self::DeleteAgent => "/delete-agent",

            Self::CreatePhoneNumber => "/create-phone-number",
            Self::GetPhoneNumber => "/get-phone-number",
            Self::ListPhoneNumbers => "/list-phone-numbers",
            Self::UpdatePhoneNumber => "/update-phone-number",
            Self::DeletePhoneNumber => "/delete-phone-number",

            Self::GetVoice => "/get-voice",
            Self::ListVoices => "/list-voices",

            Self::CreateLlm => "/create-retell-llm",
            Self::GetLlm => "/get-retell-llm",
            Self::ListLlms => "/list-retell-llms",
            Self::UpdateLlm => "/update-retell-llm",
            Self::DeleteLlm => "/delete-retell-llm",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            // Retell lists calls through a POST with an (optional) filter body
            Self::ListCalls => Method::POST,
            _ => match self.kind() {
                OperationKind::Create => Method::POST,
                OperationKind::Retrieve | OperationKind::List => Method::GET,
                OperationKind::Update => Method::PATCH,
                OperationKind::Delete => Method::DELETE,
            },
        }
    }

    pub fn takes_id(&self) -> bool {
        matches!(
            self.kind(),
            OperationKind::Retrieve | OperationKind::Update | OperationKind::Delete
        )
    }

    pub fn sends_body(&self) -> bool {
        self.method() == Method::POST || self.method() == Method::PATCH
    }

    /// Short name, e.g. `create-phone-call`, used in logs.
    pub fn name(&self) -> &'static str {
        let path = self.path();
        path.rsplit('/').next().unwrap_or(path)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

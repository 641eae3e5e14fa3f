//! Member registry
//!
//! Builder that inspectable types fill in from `describe`. Entries are kept in
//! declaration order; the scanner turns them into descriptors.


use super::types::{
    Constraints, DescriptorId, MemberDescriptor, MemberKind, ParamList, ParamSpec, ValueType,
};

/// A declared member, before scanning
#[derive(Debug, Clone)]
pub struct DeclaredMember {
    /// Type that declared the member
    pub declaring_type: String,
    /// Member name
    pub name: String,
    pub kind: MemberKind,
    /// Button text or foldout header
    pub label: String,
    pub value_type: Option<ValueType>,
    pub constraints: Option<Constraints>,
    pub params: ParamList,
    /// Whether a foldout starts expanded
    pub default_expanded: bool,
    pub hidden: bool,
}

impl DeclaredMember {
    /// Convert into an immutable descriptor
    pub fn to_descriptor(&self) -> MemberDescriptor {
        MemberDescriptor {
            id: DescriptorId::new(&self.declaring_type, &self.name),
            declaring_type: self.declaring_type.clone(),
            name: self.name.clone(),
            kind: self.kind,
            label: self.label.clone(),
            value_type: self.value_type,
            constraints: self.constraints,
            params: self.params.clone(),
            default_expanded: self.default_expanded,
            hidden: self.hidden,
        }
    }
}

/// Builder state for action registration
struct PendingAction {
    name: String,
    params: ParamList,
}

/// Registry of declared members for one target type
pub struct MemberRegistry {
    /// Type being described
    root_type: String,
    /// All declared members, in declaration order
    pub members: Vec<DeclaredMember>,
    /// Base type stack during registration
    base_stack: Vec<String>,
    /// Whether registration has been finalized
    pub finalized: bool,
    /// Pending action being built (between action_begin and action_end)
    pending_action: Option<PendingAction>,
}

impl MemberRegistry {
    /// Create an empty registry for the given root type
    pub fn new(root_type: &str) -> Self {
        Self {
            root_type: root_type.to_string(),
            members: Vec::new(),
            base_stack: Vec::new(),
            finalized: false,
            pending_action: None,
        }
    }

    /// Name of the type being described
    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Begin declaring members inherited from a base type
    pub fn base_begin(&mut self, type_name: &str) {
        if self.finalized {
            tracing::warn!("base_begin called after finalize - ignored");
            return;
        }
        self.base_stack.push(type_name.to_string());
    }

    /// End the current base type scope
    pub fn base_end(&mut self) {
        if self.finalized {
            tracing::warn!("base_end called after finalize - ignored");
            return;
        }
        if self.base_stack.pop().is_none() {
            tracing::warn!("base_end called without matching begin");
        }
    }

    /// Declare a zero-argument action (rendered as a button)
    pub fn button(&mut self, name: &str) {
        if self.finalized {
            tracing::warn!("button '{}' declared after finalize - ignored", name);
            return;
        }
        self.push_action(name, ParamList::new());
    }

    // =========================================================================
    // Actions with parameters (builder pattern)
    // =========================================================================

    /// Begin declaring an action that takes parameters
    ///
    /// Call `action_param` for each parameter, then `action_end`.
    pub fn action_begin(&mut self, name: &str) {
        if self.finalized {
            tracing::warn!("action_begin called after finalize - ignored");
            return;
        }

        if self.pending_action.is_some() {
            tracing::warn!("action_begin called while another action is pending - ignored");
            return;
        }

        self.pending_action = Some(PendingAction {
            name: name.to_string(),
            params: ParamList::new(),
        });
    }

    /// Add a parameter to the pending action
    pub fn action_param(&mut self, name: &str, value_type: ValueType) {
        if self.finalized {
            tracing::warn!("action_param called after finalize - ignored");
            return;
        }

        if let Some(pending) = &mut self.pending_action {
            pending.params.push(ParamSpec {
                name: name.to_string(),
                value_type,
            });
        } else {
            tracing::warn!("action_param called without action_begin - ignored");
        }
    }

    /// Finish the pending action and declare it
    pub fn action_end(&mut self) {
        if self.finalized {
            tracing::warn!("action_end called after finalize - ignored");
            return;
        }

        if let Some(pending) = self.pending_action.take() {
            self.push_action(&pending.name, pending.params);
        } else {
            tracing::warn!("action_end called without action_begin - ignored");
        }
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Declare a plain serialized field
    pub fn field(&mut self, name: &str, value_type: ValueType, constraints: Option<Constraints>) {
        self.push_field(name, MemberKind::Field, String::new(), value_type, constraints, false);
    }

    /// Declare a field that is never drawn by the generic field helper
    pub fn hidden_field(&mut self, name: &str, value_type: ValueType) {
        self.push_field(name, MemberKind::Field, String::new(), value_type, None, true);
    }

    /// Declare a field decorated with a foldout header
    pub fn foldout(&mut self, name: &str, value_type: ValueType, header: &str) {
        self.push_field(name, MemberKind::Foldout, header.to_string(), value_type, None, false);
    }

    /// Declare a foldout field that starts collapsed
    pub fn foldout_collapsed(&mut self, name: &str, value_type: ValueType, header: &str) {
        let before = self.members.len();
        self.foldout(name, value_type, header);
        if self.members.len() > before
            && let Some(member) = self.members.last_mut()
        {
            member.default_expanded = false;
        }
    }

    /// Declare a foldout field with range constraints
    pub fn foldout_with_range(
        &mut self,
        name: &str,
        value_type: ValueType,
        header: &str,
        constraints: Constraints,
    ) {
        self.push_field(
            name,
            MemberKind::Foldout,
            header.to_string(),
            value_type,
            Some(constraints),
            false,
        );
    }

    fn declaring_type(&self) -> String {
        self.base_stack
            .last()
            .cloned()
            .unwrap_or_else(|| self.root_type.clone())
    }

    fn push_action(&mut self, name: &str, params: ParamList) {
        self.members.push(DeclaredMember {
            declaring_type: self.declaring_type(),
            name: name.to_string(),
            kind: MemberKind::Action,
            label: name.to_string(),
            value_type: None,
            constraints: None,
            params,
            default_expanded: true,
            hidden: false,
        });
    }

    fn push_field(
        &mut self,
        name: &str,
        kind: MemberKind,
        label: String,
        value_type: ValueType,
        constraints: Option<Constraints>,
        hidden: bool,
    ) {
        if self.finalized {
            tracing::warn!("field '{}' declared after finalize - ignored", name);
            return;
        }

        self.members.push(DeclaredMember {
            declaring_type: self.declaring_type(),
            name: name.to_string(),
            kind,
            label,
            value_type: Some(value_type),
            constraints,
            params: ParamList::new(),
            default_expanded: true,
            hidden,
        });
    }

    /// Finalize registration (called after `describe` returns)
    ///
    /// Auto-closes unclosed base scopes, discards a pending action and
    /// prevents further registration.
    pub fn finalize(&mut self) {
        if !self.base_stack.is_empty() {
            tracing::warn!(
                "{}: {} unclosed base scopes at end of describe, auto-closing",
                self.root_type,
                self.base_stack.len()
            );
            self.base_stack.clear();
        }

        if let Some(pending) = self.pending_action.take() {
            tracing::warn!(
                "{}: unclosed action '{}' at end of describe, discarding",
                self.root_type,
                pending.name
            );
        }

        self.finalized = true;
    }

    /// Get number of declared members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if no members were declared
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// src/draft/store.rs

use super::types::{
    seed_parties, Asset, AssetDraft, AssetId, AssetPatch, Party, PartyDraft, PartyId, PartyPatch,
    PartyRole, WillPreview,
};

/// In-memory will draft: the two record collections plus what is selected for the will.
#[derive(Debug, Clone)]
pub struct DraftStore {
    assets: Vec<Asset>,
    parties: Vec<Party>,

    selected_asset_ids: Vec<AssetId>,
    selected_beneficiary_ids: Vec<PartyId>,
    selected_witness_ids: Vec<PartyId>,
    lawyer_id: Option<PartyId>,
    instructions: String,

    // survives reset_will so ids are never handed out twice
    next_id: u64,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStore {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            parties: seed_parties(),
            selected_asset_ids: Vec::new(),
            selected_beneficiary_ids: Vec::new(),
            selected_witness_ids: Vec::new(),
            lawyer_id: None,
            instructions: String::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self, prefix: &str) -> String {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        format!("{prefix}_{id}")
    }

    // ======================================================
    // assets
    // ======================================================

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn add_asset(&mut self, draft: AssetDraft) -> AssetId {
        let id = self.alloc_id("asset");
        self.assets.push(Asset {
            id: id.clone(),
            asset_type: draft.asset_type,
            description: draft.description,
            value: draft.value,
            document_proof_url: draft.document_proof_url,
        });
        log::debug!("draft: added {id}");
        id
    }

    /// Returns false (and changes nothing) when the id is unknown.
    pub fn update_asset(&mut self, id: &str, patch: AssetPatch) -> bool {
        match self.assets.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                patch.apply_to(a);
                true
            }
            None => false,
        }
    }

    /// Also drops the id from the asset selection.
    pub fn remove_asset(&mut self, id: &str) -> bool {
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        self.selected_asset_ids.retain(|x| x != id);
        self.assets.len() != before
    }

    // ======================================================
    // parties
    // ======================================================

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn party(&self, id: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn parties_with_role(&self, role: PartyRole) -> Vec<&Party> {
        self.parties.iter().filter(|p| p.user_role == role).collect()
    }

    pub fn beneficiaries(&self) -> Vec<&Party> {
        self.parties_with_role(PartyRole::Beneficiary)
    }

    pub fn witnesses(&self) -> Vec<&Party> {
        self.parties_with_role(PartyRole::Witness)
    }

    pub fn lawyers(&self) -> Vec<&Party> {
        self.parties_with_role(PartyRole::Lawyer)
    }

    pub fn add_party(&mut self, draft: PartyDraft) -> PartyId {
        let id = self.alloc_id("party");
        self.parties.push(Party {
            id: id.clone(),
            user_name: draft.user_name,
            user_role: draft.user_role,
            relationship: draft.relationship,
            email: draft.email,
            phone_number: draft.phone_number,
            user_signature: draft.user_signature,
            user_signature_type: draft.user_signature_type,
        });
        log::debug!("draft: added {id}");
        id
    }

    /// Returns false when the id is unknown. A role change drops the id from
    /// selections that belong to its old role.
    pub fn update_party(&mut self, id: &str, patch: PartyPatch) -> bool {
        let Some(p) = self.parties.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        let old_role = p.user_role;
        patch.apply_to(p);
        let new_role = p.user_role;

        if old_role != new_role {
            self.unselect_party_role(id, old_role);
        }
        true
    }

    pub fn remove_party(&mut self, id: &str) -> bool {
        let before = self.parties.len();
        self.parties.retain(|p| p.id != id);
        for role in PartyRole::ALL {
            self.unselect_party_role(id, role);
        }
        self.parties.len() != before
    }

    fn unselect_party_role(&mut self, id: &str, role: PartyRole) {
        match role {
            PartyRole::Beneficiary => self.selected_beneficiary_ids.retain(|x| x != id),
            PartyRole::Witness => self.selected_witness_ids.retain(|x| x != id),
            PartyRole::Lawyer => {
                if self.lawyer_id.as_deref() == Some(id) {
                    self.lawyer_id = None;
                }
            }
        }
    }

    // ======================================================
    // selections (whole-list replace)
    // ======================================================

    pub fn selected_asset_ids(&self) -> &[AssetId] {
        &self.selected_asset_ids
    }

    pub fn set_selected_asset_ids(&mut self, ids: Vec<AssetId>) {
        self.selected_asset_ids = ids;
    }

    pub fn selected_beneficiary_ids(&self) -> &[PartyId] {
        &self.selected_beneficiary_ids
    }

    pub fn set_selected_beneficiary_ids(&mut self, ids: Vec<PartyId>) {
        self.selected_beneficiary_ids = ids;
    }

    pub fn selected_witness_ids(&self) -> &[PartyId] {
        &self.selected_witness_ids
    }

    pub fn set_selected_witness_ids(&mut self, ids: Vec<PartyId>) {
        self.selected_witness_ids = ids;
    }

    pub fn lawyer_id(&self) -> Option<&str> {
        self.lawyer_id.as_deref()
    }

    /// An empty id clears the assignment.
    pub fn set_lawyer_id(&mut self, id: Option<PartyId>) {
        self.lawyer_id = id.filter(|s| !s.is_empty());
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_instructions(&mut self, text: impl Into<String>) {
        self.instructions = text.into();
    }

    /// Back to a fresh draft: no assets, the seed party list, nothing selected.
    pub fn reset_will(&mut self) {
        self.selected_asset_ids.clear();
        self.selected_beneficiary_ids.clear();
        self.selected_witness_ids.clear();
        self.lawyer_id = None;
        self.instructions.clear();
        self.assets.clear();
        self.parties = seed_parties();
    }

    pub fn preview(&self) -> WillPreview<'_> {
        let assets = self
            .selected_asset_ids
            .iter()
            .filter_map(|id| self.asset(id))
            .collect();

        let pick = |ids: &[PartyId], role: PartyRole| -> Vec<&Party> {
            ids.iter()
                .filter_map(|id| self.party(id))
                .filter(|p| p.user_role == role)
                .collect()
        };

        WillPreview {
            assets,
            beneficiaries: pick(&self.selected_beneficiary_ids, PartyRole::Beneficiary),
            witnesses: pick(&self.selected_witness_ids, PartyRole::Witness),
            lawyer: self
                .lawyer_id
                .as_deref()
                .and_then(|id| self.party(id))
                .filter(|p| p.user_role == PartyRole::Lawyer),
            instructions: &self.instructions,
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================

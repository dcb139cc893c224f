/*++

Licensed under the Apache-2.0 license.

File Name:

    engine.rs

Abstract:

    This file is the main implementation of the Chain-of-Trust
    verification engine.

--*/

use crate::method::{verify_hash, verify_root_key, verify_signature};
use crate::parser::{ImageParser, ParserRegistry};
use crate::pool::ParamPool;
use crate::rollback::{AntiRollbackGate, RollbackDecision};
use crate::state::AuthState;
use crate::{cprintln, CryptoProvider, ImageLoader, NvCounterStorage, PlatformEnv};
use cot_error::{CotError, CotResult, ErrorKind};
use cot_image_types::{AuthMethodDesc, AuthParamRef, CotNode, CotTable, ImageId, ParamSource};

/// Rejected verification
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rejection<Id> {
    /// Requested image
    pub image: Id,

    /// Image whose authentication failed; an ancestor of `image` or
    /// `image` itself
    pub failed_at: Id,

    /// Error reported where the failure occurred
    pub error: CotError,
}

impl<Id: ImageId> Rejection<Id> {
    /// Reason reported to the loader
    pub fn kind(&self) -> ErrorKind {
        if self.image != self.failed_at {
            ErrorKind::UntrustedAncestor
        } else {
            self.error.kind()
        }
    }
}

/// Authentication module
///
/// # Generic Parameters
///
/// * `N`     - Descriptor table size
/// * `SLOTS` - Parameter buffer pool slots
/// * `CAP`   - Capacity of each parameter buffer
/// * `P`     - Parser registry capacity
pub struct AuthModule<
    'a,
    Id: ImageId,
    C,
    E,
    S,
    const N: usize,
    const SLOTS: usize,
    const CAP: usize,
    const P: usize,
> {
    table: &'a CotTable<Id, N>,
    registry: ParserRegistry<'a, P>,
    crypto: C,
    env: E,
    gate: AntiRollbackGate<S>,
    pool: ParamPool<SLOTS, CAP>,
    state: AuthState<N>,
}

impl<
        'a,
        Id: ImageId,
        C: CryptoProvider,
        E: PlatformEnv<Id>,
        S: NvCounterStorage<Id>,
        const N: usize,
        const SLOTS: usize,
        const CAP: usize,
        const P: usize,
    > AuthModule<'a, Id, C, E, S, N, SLOTS, CAP, P>
{
    /// Create an authentication module
    ///
    /// Every node of the table must have a registered parser and publish
    /// into slots that exist in the pool and can hold the declared size.
    /// Two nodes may publish into the same slot only when one descends from
    /// the other and the upper node has a single child, so no reader of the
    /// upper node's data is left behind once the slot is overwritten.
    ///
    /// # Arguments
    ///
    /// * `table`    - Validated descriptor table
    /// * `registry` - Image parsers
    /// * `crypto`   - Crypto provider
    /// * `env`      - Platform environment
    /// * `storage`  - Non-volatile counter storage
    pub fn new(
        table: &'a CotTable<Id, N>,
        registry: ParserRegistry<'a, P>,
        crypto: C,
        env: E,
        storage: S,
    ) -> CotResult<Self> {
        for node in table.nodes() {
            if registry.lookup(node.format).is_none() {
                cprintln!("[cot] No parser for image {}", node.id.index());
                return Err(CotError::CONFIG_PARSER_MISSING);
            }
            for desc in node.authenticated_data {
                if desc.slot >= SLOTS {
                    return Err(CotError::CONFIG_SLOT_OUT_OF_RANGE);
                }
                if desc.max_len > CAP {
                    return Err(CotError::CONFIG_SLOT_TOO_SMALL);
                }
            }
        }
        Self::check_slot_sharing(table)?;

        Ok(Self {
            table,
            registry,
            crypto,
            env,
            gate: AntiRollbackGate::new(storage),
            pool: ParamPool::default(),
            state: AuthState::default(),
        })
    }

    /// Verify an image and, first, every unauthenticated ancestor
    ///
    /// # Arguments
    ///
    /// * `loader` - Source of ancestor images
    /// * `id`     - Image to verify
    /// * `buf`    - Loaded image
    ///
    /// # Returns
    ///
    /// * `Rejection` - The image, where the chain broke, and why
    pub fn verify_image<L: ImageLoader<Id>>(
        &mut self,
        loader: &L,
        id: Id,
        buf: &[u8],
    ) -> Result<(), Rejection<Id>> {
        let result = self.authenticate(loader, id, buf, 0);
        match &result {
            Ok(()) => cprintln!("[cot] Image {} accepted", id.index()),
            Err(rejection) => cprintln!(
                "[cot] Image {} rejected at image {}: 0x{:08X}",
                id.index(),
                rejection.failed_at.index(),
                u32::from(rejection.error)
            ),
        }
        result
    }

    /// Check whether an image has been authenticated during this boot
    pub fn is_authenticated(&self, id: Id) -> bool {
        self.state.is_authenticated(id.index())
    }

    /// Parent of an image in the chain
    pub fn parent_of(&self, id: Id) -> Option<Id> {
        self.table.parent_of(id)
    }

    /// Wipe all published parameters
    ///
    /// Children of already authenticated images can no longer be verified
    /// afterwards.
    pub fn clear_params(&mut self) {
        self.pool.clear();
    }

    pub fn crypto(&self) -> &C {
        &self.crypto
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn storage(&self) -> &S {
        self.gate.storage()
    }

    fn authenticate<L: ImageLoader<Id>>(
        &mut self,
        loader: &L,
        id: Id,
        buf: &[u8],
        depth: usize,
    ) -> Result<(), Rejection<Id>> {
        let reject = move |error| Rejection {
            image: id,
            failed_at: id,
            error,
        };

        if depth > N {
            return Err(reject(CotError::ENGINE_DEPTH_EXCEEDED));
        }
        let node = self.table.node(id).map_err(reject)?;
        if self.state.is_authenticated(id.index()) {
            return Ok(());
        }

        let parser = self
            .registry
            .lookup(node.format)
            .ok_or(CotError::CONFIG_PARSER_MISSING)
            .map_err(reject)?;
        parser.check_integrity(buf).map_err(reject)?;

        if let Some(parent) = node.parent {
            if !self.state.is_authenticated(parent.index()) {
                let parent_buf = loader.image(parent).ok_or(Rejection {
                    image: id,
                    failed_at: parent,
                    error: CotError::ANCESTOR_NOT_LOADED,
                })?;
                self.authenticate(loader, parent, parent_buf, depth + 1)
                    .map_err(|rejection| Rejection {
                        image: id,
                        ..rejection
                    })?;
            }
            self.state
                .check_authenticated(parent.index())
                .map_err(reject)?;
        }

        self.authenticate_node(node, parser, buf).map_err(reject)
    }

    fn authenticate_node(
        &mut self,
        node: &CotNode<Id>,
        parser: &dyn ImageParser,
        buf: &[u8],
    ) -> CotResult<()> {
        for method in node.methods {
            self.run_method(node, parser, method, buf)?;
        }

        let decision = match node.nv_ctr {
            Some(nv_ctr) => {
                let declared = parser.get_nv_counter(nv_ctr, buf)?;
                let exempt = self.env.rollback_exempt(node.id);
                self.gate.check(node.id, declared, exempt)?
            }
            None => RollbackDecision::NoCommit,
        };

        let index = node.id.index();
        if let Err(err) = self.publish(node, parser, buf) {
            self.pool.release_owner(index);
            return Err(err);
        }
        if let RollbackDecision::Commit(value) = decision {
            if let Err(err) = self.gate.commit(node.id, value) {
                self.pool.release_owner(index);
                return Err(err);
            }
        }

        self.state.set_authenticated(index);
        self.state.check_authenticated(index)
    }

    fn run_method(
        &self,
        node: &CotNode<Id>,
        parser: &dyn ImageParser,
        method: &AuthMethodDesc,
        buf: &[u8],
    ) -> CotResult<()> {
        match method {
            AuthMethodDesc::Signature { pk, sig, alg, data } => {
                let pk_value = self.resolve(node, parser, pk, buf)?;
                if node.parent.is_none() {
                    let rotpk = self.env.rotpk(pk.type_desc)?;
                    verify_root_key(&self.crypto, rotpk, pk_value)?;
                }
                verify_signature(
                    &self.crypto,
                    pk_value,
                    self.resolve(node, parser, sig, buf)?,
                    self.resolve(node, parser, alg, buf)?,
                    self.resolve(node, parser, data, buf)?,
                )
            }
            AuthMethodDesc::Hash { data, hash } => verify_hash(
                &self.crypto,
                self.resolve(node, parser, data, buf)?,
                self.resolve(node, parser, hash, buf)?,
            ),
        }
    }

    /// Obtain a method parameter from the image or from the parent's
    /// authenticated data
    fn resolve<'b>(
        &'b self,
        node: &CotNode<Id>,
        parser: &dyn ImageParser,
        param: &AuthParamRef,
        buf: &'b [u8],
    ) -> CotResult<&'b [u8]> {
        match param.source {
            ParamSource::Image => parser.get_param(param.type_desc, buf),
            ParamSource::Parent => {
                let parent = node.parent.ok_or(CotError::PARAM_NOT_FOUND)?;
                let desc = self
                    .table
                    .node(parent)?
                    .published(param.type_desc)
                    .ok_or(CotError::PARAM_NOT_PUBLISHED)?;
                self.pool.get(desc.slot, parent.index())
            }
        }
    }

    fn check_slot_sharing(table: &CotTable<Id, N>) -> CotResult<()> {
        let published = || {
            table
                .nodes()
                .flat_map(|node| node.authenticated_data.iter().map(move |desc| (node.id, desc)))
        };

        for (i, (id, desc)) in published().enumerate() {
            for (other, other_desc) in published().skip(i + 1) {
                if desc.slot != other_desc.slot {
                    continue;
                }
                let upper = if table.is_ancestor(id, other) {
                    id
                } else if table.is_ancestor(other, id) {
                    other
                } else {
                    cprintln!(
                        "[cot] Images {} and {} share slot {}",
                        id.index(),
                        other.index(),
                        desc.slot
                    );
                    return Err(CotError::CONFIG_SLOT_SHARED);
                };
                if table.child_count(upper) != 1 {
                    return Err(CotError::CONFIG_SLOT_SHARED);
                }
            }
        }
        Ok(())
    }

    fn publish(
        &mut self,
        node: &CotNode<Id>,
        parser: &dyn ImageParser,
        buf: &[u8],
    ) -> CotResult<()> {
        for desc in node.authenticated_data {
            let value = parser.get_param(desc.type_desc, buf)?;
            if value.len() > desc.max_len {
                return Err(CotError::PARAM_TOO_LARGE);
            }
            self.pool.publish(desc.slot, node.id.index(), value)?;
        }
        Ok(())
    }
}

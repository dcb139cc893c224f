/*++

Licensed under the Apache-2.0 license.

File Name:

   table.rs

Abstract:

    File contains the Chain of Trust descriptor table and its init-time
    validation.

--*/

use crate::{AuthMethodDesc, AuthParamRef, CotNode, ImageId, ParamSource};
use cot_error::{CotError, CotResult};

/// Chain of Trust descriptor table
///
/// Arena of nodes indexed by `ImageId::index()`. A table can only be
/// obtained through [`CotTable::new`], which rejects tables that are not a
/// forest or whose nodes reference parameters they cannot obtain.
#[derive(Debug)]
pub struct CotTable<Id: ImageId, const N: usize> {
    nodes: [Option<&'static CotNode<Id>>; N],
}

impl<Id: ImageId, const N: usize> CotTable<Id, N> {
    /// Build and validate a descriptor table
    ///
    /// # Arguments
    ///
    /// * `nodes` - Nodes of the trust graph, in any order
    ///
    /// # Returns
    ///
    /// * `CotTable` - Validated table
    pub fn new(nodes: &'static [CotNode<Id>]) -> CotResult<Self> {
        let mut arena = [None; N];
        for node in nodes {
            let entry = arena
                .get_mut(node.id.index())
                .ok_or(CotError::CONFIG_IMAGE_ID_OUT_OF_RANGE)?;
            if entry.is_some() {
                return Err(CotError::CONFIG_DUPLICATE_NODE);
            }
            *entry = Some(node);
        }

        let table = Self { nodes: arena };
        for node in nodes {
            table.validate_node(node)?;
        }
        Ok(table)
    }

    /// Look up the node of an image
    pub fn node(&self, id: Id) -> CotResult<&'static CotNode<Id>> {
        self.nodes
            .get(id.index())
            .copied()
            .flatten()
            .filter(|node| node.id == id)
            .ok_or(CotError::IMAGE_UNKNOWN)
    }

    /// Parent of an image, `None` for roots and unknown images
    pub fn parent_of(&self, id: Id) -> Option<Id> {
        self.node(id).ok().and_then(|node| node.parent)
    }

    /// Iterate over every node in index order
    pub fn nodes(&self) -> impl Iterator<Item = &'static CotNode<Id>> + '_ {
        self.nodes.iter().filter_map(|node| *node)
    }

    /// Number of ancestors above an image
    pub fn depth(&self, id: Id) -> CotResult<usize> {
        let mut depth = 0;
        let mut cur = self.node(id)?.parent;
        while let Some(parent) = cur {
            depth += 1;
            if depth > N {
                return Err(CotError::CONFIG_COT_CYCLE);
            }
            cur = self.node(parent)?.parent;
        }
        Ok(depth)
    }

    /// Check whether `ancestor` lies above `id` in the chain
    pub fn is_ancestor(&self, ancestor: Id, id: Id) -> bool {
        let mut steps = 0;
        let mut cur = self.parent_of(id);
        while let Some(parent) = cur {
            if parent == ancestor {
                return true;
            }
            steps += 1;
            if steps > N {
                return false;
            }
            cur = self.parent_of(parent);
        }
        false
    }

    /// Number of nodes whose parent is `id`
    pub fn child_count(&self, id: Id) -> usize {
        self.nodes().filter(|node| node.parent == Some(id)).count()
    }

    fn validate_node(&self, node: &CotNode<Id>) -> CotResult<()> {
        if node.methods.is_empty() {
            return Err(CotError::CONFIG_NO_AUTH_METHODS);
        }

        let parent = match node.parent {
            Some(parent_id) => {
                if parent_id.index() >= N {
                    return Err(CotError::CONFIG_IMAGE_ID_OUT_OF_RANGE);
                }
                let parent = self
                    .node(parent_id)
                    .map_err(|_| CotError::CONFIG_PARENT_MISSING)?;
                self.check_acyclic(node)?;
                Some(parent)
            }
            None => None,
        };

        for (i, desc) in node.authenticated_data.iter().enumerate() {
            let dup = node
                .authenticated_data
                .iter()
                .skip(i + 1)
                .any(|other| other.type_desc == desc.type_desc);
            if dup {
                return Err(CotError::CONFIG_DUPLICATE_PUBLISHED_PARAM);
            }
        }

        for method in node.methods {
            Self::validate_method_sources(method, parent.is_none())?;

            for param in method.params() {
                if param.source != ParamSource::Parent {
                    continue;
                }
                let Some(parent) = parent else {
                    return Err(CotError::CONFIG_PARENT_PARAM_ON_ROOT);
                };
                if parent.published(param.type_desc).is_none() {
                    return Err(CotError::CONFIG_PARENT_PARAM_NOT_PUBLISHED);
                }
            }
        }

        Ok(())
    }

    fn check_acyclic(&self, node: &CotNode<Id>) -> CotResult<()> {
        let mut steps = 0;
        let mut cur = node.parent;
        while let Some(id) = cur {
            steps += 1;
            if id == node.id || steps > N {
                return Err(CotError::CONFIG_COT_CYCLE);
            }
            cur = self
                .node(id)
                .map_err(|_| CotError::CONFIG_PARENT_MISSING)?
                .parent;
        }
        Ok(())
    }

    fn validate_method_sources(method: &AuthMethodDesc, is_root: bool) -> CotResult<()> {
        let from_image = |param: &AuthParamRef| param.source == ParamSource::Image;

        match method {
            AuthMethodDesc::Signature { pk, sig, alg, data } => {
                if !from_image(sig) || !from_image(alg) || !from_image(data) {
                    return Err(CotError::CONFIG_DATA_NOT_FROM_IMAGE);
                }
                match (is_root, from_image(pk)) {
                    (true, false) => Err(CotError::CONFIG_ROOT_KEY_NOT_FROM_IMAGE),
                    (false, true) => Err(CotError::CONFIG_IMAGE_KEY_ON_CHILD),
                    _ => Ok(()),
                }
            }
            AuthMethodDesc::Hash { data, hash } => {
                if !from_image(data) {
                    return Err(CotError::CONFIG_DATA_NOT_FROM_IMAGE);
                }
                if from_image(hash) {
                    return Err(CotError::CONFIG_HASH_NOT_FROM_PARENT);
                }
                Ok(())
            }
        }
    }
}

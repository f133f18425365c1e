//! Descriptor builder - turns a catalog entry and its config into a
//! deployment descriptor.

use crate::domain::entities::{AppConfig, AppEntry, DeploymentDescriptor};
use crate::domain::value_objects::Target;
use crate::error::{NuaError, NuaResult};

/// Pure descriptor construction
pub struct DescriptorBuilder;

impl DescriptorBuilder {
    /// Build the descriptor for one application.
    ///
    /// `image` always comes from `metadata.id`; the domain label is the
    /// entry's hostname override, or the image id when there is none.
    pub fn build(
        entry: &AppEntry,
        config: &AppConfig,
        target: &Target,
    ) -> NuaResult<DeploymentDescriptor> {
        let image = config
            .metadata_id()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| NuaError::MissingMetadataId {
                id: entry.id().to_string(),
            })?;

        let hostname = entry.display_hostname().unwrap_or(image);
        let domain = format!("{}.{}", hostname, target.domain());

        Ok(DeploymentDescriptor::new(image, domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn target() -> Target {
        Target::new("localhost", "example.com", "/srv/apps")
    }

    fn config(id: &str) -> AppConfig {
        AppConfig::parse(&format!("[metadata]\nid = \"{}\"\n", id)).unwrap()
    }

    #[test]
    fn hostname_override_is_used_for_domain() {
        let entry = AppEntry::with_hostname("galene", "visio").unwrap();
        let descriptor = DescriptorBuilder::build(&entry, &config("galene"), &target()).unwrap();
        assert_eq!(
            descriptor,
            DeploymentDescriptor::new("galene", "visio.example.com")
        );
    }

    #[test]
    fn image_id_is_used_without_override() {
        let entry = AppEntry::new("etherpad").unwrap();
        let descriptor =
            DescriptorBuilder::build(&entry, &config("pad-service"), &target()).unwrap();
        assert_eq!(
            descriptor,
            DeploymentDescriptor::new("pad-service", "pad-service.example.com")
        );
    }

    #[test]
    fn missing_metadata_id_names_the_app() {
        let entry = AppEntry::new("ackee").unwrap();
        let empty = AppConfig::parse("[metadata]\nname = \"Ackee\"\n").unwrap();
        let err = DescriptorBuilder::build(&entry, &empty, &target()).unwrap_err();
        assert!(matches!(err, NuaError::MissingMetadataId { ref id } if id == "ackee"));
    }

    #[test]
    fn blank_metadata_id_counts_as_missing() {
        let entry = AppEntry::new("ackee").unwrap();
        let err = DescriptorBuilder::build(&entry, &config(" "), &target()).unwrap_err();
        assert!(matches!(err, NuaError::MissingMetadataId { .. }));
    }

    proptest! {
        #[test]
        fn image_is_never_the_catalog_id(
            catalog_id in "[a-z][a-z0-9-]{0,12}",
            image in "[a-z][a-z0-9-]{0,12}",
        ) {
            let entry = AppEntry::new(catalog_id).unwrap();
            let descriptor = DescriptorBuilder::build(&entry, &config(&image), &target()).unwrap();
            prop_assert_eq!(&descriptor.image, &image);
            prop_assert_eq!(descriptor.domain, format!("{}.example.com", image));
        }
    }
}

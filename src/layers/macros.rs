//! Macros to reduce boilerplate in layer implementations
//!
//! Both layer kinds keep their shared state in a `LayerProperties` field;
//! this generates the `LayerTrait` accessors over it.

/// Implements the `LayerTrait` accessors backed by a `LayerProperties` field
///
/// Usage (inside an `impl LayerTrait for ...` block):
/// ```ignore
/// impl_layer_trait!(properties);
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$properties_field.z_index = z_index;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

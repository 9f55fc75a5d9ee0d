//! Macro para declarar marcadores de nombre de clave sin boilerplate.
//!
//! Exportada en la raíz del crate:
//!   use mapobject_core::key_name;

/// Declara uno o varios tipos marcador que implementan `KeyName`.
///
/// Formas soportadas:
/// - key_name!(PersonId => "personId");
/// - key_name! { GroupId => "groupId"; Sku => "sku"; }
#[macro_export]
macro_rules! key_name {
    ($($name:ident => $field:expr);+ $(;)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;
            impl $crate::key::KeyName for $name {
                const NAME: &'static str = $field;
            }
        )+
    };
}

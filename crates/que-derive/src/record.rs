//! Record derive macro implementation

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Fields, LitStr, Result};

/// Struct-level `rename_all` rule.
#[derive(Clone, Copy)]
enum RenameRule {
    Snake,
    LowerCamel,
    UpperCamel,
    ScreamingSnake,
    Kebab,
    Lower,
    Upper,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        match lit.value().as_str() {
            "snake_case" => Ok(Self::Snake),
            "camelCase" => Ok(Self::LowerCamel),
            "PascalCase" => Ok(Self::UpperCamel),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            other => Err(Error::new(
                lit.span(),
                format!("unknown rename_all rule `{other}`"),
            )),
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::Snake => name.to_snake_case(),
            Self::LowerCamel => name.to_lower_camel_case(),
            Self::UpperCamel => name.to_upper_camel_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
        }
    }
}

#[derive(Default)]
struct FieldAttr {
    skip: bool,
    rename: Option<String>,
}

fn parse_struct_attrs(attrs: &[Attribute]) -> Result<Option<RenameRule>> {
    let mut rule = None;
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let lit: LitStr = meta.value()?.parse()?;
                rule = Some(RenameRule::parse(&lit)?);
                Ok(())
            } else {
                Err(meta.error("expected `rename_all = \"...\"`"))
            }
        })?;
    }
    Ok(rule)
}

fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    let mut out = FieldAttr::default();
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(Error::new(lit.span(), "rename cannot be empty"));
                }
                out.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        })?;
    }
    Ok(out)
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let rule = parse_struct_attrs(&input.attrs)?;

    let mut pairs = Vec::new();
    for field in fields {
        let attr = parse_field_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let raw = ident.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);
        let attr_name = match (attr.rename, rule) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(raw),
            (None, None) => raw.to_string(),
        };

        pairs.push(quote! {
            (
                ::std::string::String::from(#attr_name),
                ::que::AttrValue::attr_value(&self.#ident),
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::que::Record for #name #ty_generics #where_clause {
            fn name_value_pairs(
                &self,
            ) -> ::std::vec::Vec<(::std::string::String, ::std::option::Option<::que::Value>)> {
                ::std::vec![#(#pairs),*]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_rules() {
        assert_eq!(RenameRule::LowerCamel.apply("user_name"), "userName");
        assert_eq!(RenameRule::UpperCamel.apply("user_name"), "UserName");
        assert_eq!(RenameRule::ScreamingSnake.apply("user_name"), "USER_NAME");
        assert_eq!(RenameRule::Kebab.apply("user_name"), "user-name");
        assert_eq!(RenameRule::Upper.apply("user_name"), "USER_NAME");
    }

    #[test]
    fn test_expand_rejects_tuple_struct() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair(i64, String);
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_expand_rejects_unknown_attr() {
        let input: DeriveInput = syn::parse_quote! {
            struct User {
                #[record(column = "x")]
                id: i64,
            }
        };
        assert!(expand(input).is_err());
    }

    #[test]
    fn test_expand_skips_fields() {
        let input: DeriveInput = syn::parse_quote! {
            struct User {
                id: i64,
                #[record(skip)]
                secret: String,
            }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("\"id\""));
        assert!(!out.contains("secret"));
    }
}

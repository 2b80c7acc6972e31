//! SchemaClass derive macro implementation

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{GenericArgument, PathArguments, Type};

use crate::parse::{parse_schema_class, split_notify, SchemaClassArgs, SchemaFieldArgs};

/// Extract the inner type from `PhantomData<T>` if present, otherwise return the type as-is
fn extract_inner_type(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "PhantomData" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner)) = args.args.first() {
                        return inner;
                    }
                }
            }
        }
    }
    ty
}

/// Check if a type is PhantomData
fn is_phantom_data(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "PhantomData";
        }
    }
    false
}

/// Accessor base name: the field ident without its leading underscore
fn clean_name(field: &SchemaFieldArgs) -> String {
    let name = field
        .ident
        .as_ref()
        .map(|i| i.to_string())
        .unwrap_or_default();
    name.strip_prefix('_').unwrap_or(&name).to_string()
}

/// Generate the SchemaClass implementation
pub fn derive_schema_class(input: syn::DeriveInput) -> TokenStream {
    match parse_schema_class(&input) {
        Ok(args) => generate_impl(args),
        Err(e) => e.write_errors(),
    }
}

fn generate_impl(args: SchemaClassArgs) -> TokenStream {
    let struct_name = &args.ident;
    let class_name = &args.class_name;

    // Get fields
    let fields = match args.data {
        darling::ast::Data::Struct(fields) => fields.fields,
        _ => {
            return syn::Error::new_spanned(
                &args.ident,
                "SchemaClass can only be derived for structs",
            )
            .to_compile_error()
        }
    };

    if !fields.iter().any(|f| f.is_handle_field()) {
        return syn::Error::new_spanned(
            struct_name,
            "SchemaClass requires a `handle: CEntityHandle` field",
        )
        .to_compile_error();
    }

    let mut field_constants = Vec::new();
    let mut accessors = Vec::new();
    for field in fields.iter().filter(|f| f.is_schema_field()) {
        match generate_field_constant(class_name, field) {
            Ok(tokens) => field_constants.push(tokens),
            Err(e) => return e.to_compile_error(),
        }
        accessors.push(generate_accessors(field));
    }

    let schema_object_impl = generate_schema_object_impl(struct_name, class_name, &fields);

    quote! {
        impl #struct_name {
            /// Source 2 class name
            pub const CLASS_NAME: &'static str = #class_name;

            #(#field_constants)*

            /// Get the entity handle
            pub fn handle(&self) -> ::cs2utils_core::entities::CEntityHandle {
                self.handle
            }

            #(#accessors)*
        }

        #schema_object_impl
    }
}

fn generate_field_constant(
    struct_class: &str,
    field: &SchemaFieldArgs,
) -> syn::Result<TokenStream> {
    let field_name = field.field_name.as_deref().unwrap_or_default();
    let field_ty = extract_inner_type(&field.ty);
    let declaring_class = field.declaring_class.as_deref().unwrap_or(struct_class);
    let const_name = format_ident!("{}_FIELD", clean_name(field).to_uppercase());
    let doc = format!("Schema field `{}::{}`", declaring_class, field_name);

    let mut notify_keys = Vec::with_capacity(field.notify.len());
    for target in &field.notify {
        let Some((class, name)) = split_notify(target) else {
            return Err(syn::Error::new_spanned(
                field.ident.as_ref(),
                format!("notify target `{}` must be written as `Class::field`", target),
            ));
        };
        notify_keys.push(quote! {
            ::cs2utils_core::schema::FieldKey { class: #class, field: #name }
        });
    }

    let constructor = if !notify_keys.is_empty() {
        quote! {
            ::cs2utils_core::schema::SchemaField::new(#declaring_class, #field_name)
                .notifies(&[#(#notify_keys),*])
        }
    } else if field.is_networked() {
        quote! {
            ::cs2utils_core::schema::SchemaField::networked(#declaring_class, #field_name)
        }
    } else {
        quote! {
            ::cs2utils_core::schema::SchemaField::new(#declaring_class, #field_name)
        }
    };

    Ok(quote! {
        #[doc = #doc]
        pub const #const_name: ::cs2utils_core::schema::SchemaField<#field_ty> = #constructor;
    })
}

fn generate_accessors(field: &SchemaFieldArgs) -> TokenStream {
    let field_name = field.field_name.as_deref().unwrap_or_default();
    // Extract inner type from PhantomData<T> if present
    let field_ty = extract_inner_type(&field.ty);
    let clean = clean_name(field);
    let getter_name = format_ident!("{}", clean);
    let setter_name = format_ident!("set_{}", clean);
    let const_name = format_ident!("{}_FIELD", clean.to_uppercase());

    let getter_doc = format!(
        "Get the value of `{}`, or `None` if the entity or field is unavailable",
        field_name
    );

    let getter = quote! {
        #[doc = #getter_doc]
        #[inline]
        pub fn #getter_name(
            &self,
            host: &dyn ::cs2utils_core::host::Host,
        ) -> ::std::option::Option<#field_ty> {
            Self::#const_name.get(host, self.handle)
        }
    };

    // Generate setter (unless readonly)
    let setter = if field.readonly {
        quote! {}
    } else {
        let setter_doc = if field.is_networked() {
            format!(
                "Set the value of `{}` and notify the engine of the change",
                field_name
            )
        } else {
            format!("Set the value of `{}`", field_name)
        };

        quote! {
            #[doc = #setter_doc]
            #[inline]
            pub fn #setter_name(&self, host: &dyn ::cs2utils_core::host::Host, value: #field_ty) {
                Self::#const_name.set(host, self.handle, value);
            }
        }
    };

    quote! {
        #getter
        #setter
    }
}

fn generate_schema_object_impl(
    struct_name: &syn::Ident,
    class_name: &str,
    fields: &[SchemaFieldArgs],
) -> TokenStream {
    // Generate field initializers for from_handle
    let field_inits: Vec<_> = fields
        .iter()
        .filter(|f| !f.is_handle_field())
        .filter_map(|f| {
            let ident = f.ident.as_ref()?;
            if is_phantom_data(&f.ty) {
                Some(quote! { #ident: ::std::marker::PhantomData })
            } else {
                Some(quote! { #ident: ::std::default::Default::default() })
            }
        })
        .collect();

    quote! {
        impl ::cs2utils_core::schema::SchemaObject for #struct_name {
            fn handle(&self) -> ::cs2utils_core::entities::CEntityHandle {
                self.handle
            }

            fn class_name(&self) -> &'static str {
                #class_name
            }

            fn from_handle(handle: ::cs2utils_core::entities::CEntityHandle) -> Option<Self> {
                if !handle.is_valid() {
                    None
                } else {
                    Some(Self {
                        handle,
                        #(#field_inits),*
                    })
                }
            }
        }
    }
}

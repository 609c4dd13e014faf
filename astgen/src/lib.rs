use heck::SnakeCase;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream, Result},
    punctuated::Punctuated,
    Ident, Token, Type, Visibility,
};

/// Parses the following syntax:
/// ```text
/// generate_ast!(
///     $VIS $AST_NAME,
///     [$($NODE_NAME => { $($FIELD_NAME: $FIELD_TYPE),+ });+]
/// )
/// ```
///
/// For example:
/// ```text
/// generate_ast!(
///     pub Expr,
///     [
///         Number => { value: f64 };
///         Binary => { left: Box<Expr>, op: char, right: Box<Expr> };
///     ]
/// )
/// ```
///
/// The visibility is applied to the enum, the node structs, the `Visitor`
/// trait and the `accept` method. Node fields are always `pub(crate)`.
struct Ast {
    vis: Visibility,
    name: Ident,
    nodes: Punctuated<AstNode, Token![;]>,
}

impl Parse for Ast {
    fn parse(input: ParseStream) -> Result<Self> {
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let nodes_input;
        syn::bracketed!(nodes_input in input);
        let nodes = nodes_input.parse_terminated(AstNode::parse)?;
        Ok(Ast { vis, name, nodes })
    }
}

struct AstNode {
    name: Ident,
    fields: Punctuated<Field, Token![,]>,
}

impl AstNode {
    fn snake_name(&self) -> String {
        self.name.to_string().to_snake_case()
    }
}

impl Parse for AstNode {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![=>]>()?;
        let fields_input;
        syn::braced!(fields_input in input);
        let fields = fields_input.parse_terminated(Field::parse)?;
        Ok(AstNode { name, fields })
    }
}

struct Field {
    name: Ident,
    ty: Type,
}

impl Parse for Field {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;
        Ok(Field { name, ty })
    }
}

#[proc_macro]
pub fn generate_ast(input: TokenStream) -> TokenStream {
    let Ast { vis, name, nodes } = syn::parse_macro_input!(input);

    let lowercase_name = name.to_string().to_lowercase();
    let node_names: Vec<_> = nodes.iter().map(|n| &n.name).collect();
    let visit_names: Vec<_> = nodes
        .iter()
        .map(|n| format_ident!("visit_{}_{}", n.snake_name(), lowercase_name))
        .collect();

    let ast_enum = quote! {
        #[derive(Debug, Clone, PartialEq)]
        #vis enum #name {
            #(#node_names(#node_names)),*
        }
    };

    let node_structs = nodes.iter().map(|n| {
        let node_name = &n.name;
        let field_names = n.fields.iter().map(|f| &f.name);
        let field_types = n.fields.iter().map(|f| &f.ty);
        quote! {
            #[derive(Debug, Clone, PartialEq)]
            #vis struct #node_name {
                #(pub(crate) #field_names: #field_types),*
            }
        }
    });

    let constructors = nodes.iter().map(|n| {
        let node_name = &n.name;
        let fn_name = format_ident!("new_{}", n.snake_name());
        let field_names: Vec<_> = n.fields.iter().map(|f| &f.name).collect();
        let field_types = n.fields.iter().map(|f| &f.ty);
        quote! {
            #vis fn #fn_name(#(#field_names: #field_types),*) -> Self {
                #name::#node_name(#node_name { #(#field_names),* })
            }
        }
    });

    let visitor = quote! {
        #vis trait Visitor<T> {
            #(fn #visit_names(&mut self, e: &#node_names) -> T;)*
        }

        impl #name {
            #(#constructors)*

            #vis fn accept<T, V: Visitor<T>>(&self, v: &mut V) -> T {
                match self {
                    #(#name::#node_names(a) => v.#visit_names(a),)*
                }
            }
        }
    };

    (quote! {
        #ast_enum
        #(#node_structs)*
        #visitor
    })
    .into()
}

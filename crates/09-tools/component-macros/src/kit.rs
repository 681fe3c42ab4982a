//! `#[kit]` 宏实现

use crate::utils::{has_generics, installer_ident};
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    meta::ParseNestedMeta, parenthesized, parse::Parse, parse::Parser, parse_macro_input,
    ItemStruct, LitStr, Result, Token, Type,
};

/// 组件宏参数
#[derive(Default)]
pub struct KitArgs {
    /// 自定义组件名称
    pub name: Option<String>,
    /// 提供的能力类型
    pub provides: Vec<Type>,
    /// 是否声明启动钩子
    pub startup: bool,
    /// 是否生成自安装代码
    pub install: bool,
}

impl KitArgs {
    /// 从属性参数解析
    pub fn from_tokens(tokens: proc_macro2::TokenStream) -> Result<Self> {
        let mut args = Self::default();
        let parser = syn::meta::parser(|meta| args.parse_meta(meta));
        parser.parse2(tokens)?;
        Ok(args)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta<'_>) -> Result<()> {
        if meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            self.name = Some(lit.value());
        } else if meta.path.is_ident("provides") {
            let content;
            parenthesized!(content in meta.input);
            let types = content.parse_terminated(Type::parse, Token![,])?;
            self.provides.extend(types);
        } else if meta.path.is_ident("startup") {
            self.startup = true;
        } else if meta.path.is_ident("install") {
            self.install = true;
        } else {
            return Err(meta.error("不支持的 kit 参数，可用参数: name, provides, startup, install"));
        }
        Ok(())
    }
}

/// 实现 #[kit] 宏
pub fn kit_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let kit_args = match KitArgs::from_tokens(args.into()) {
        Ok(args) => args,
        Err(e) => return e.to_compile_error().into(),
    };

    let item = parse_macro_input!(input as ItemStruct);

    match expand(&kit_args, &item) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 生成结构体、`Kit` 实现和可选的安装函数
pub fn expand(args: &KitArgs, item: &ItemStruct) -> Result<proc_macro2::TokenStream> {
    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let name_fn = args.name.as_ref().map(|name| {
        quote! {
            fn name(&self) -> &'static str {
                #name
            }
        }
    });

    // 先绑定为 `Arc<Self>`，再由 `provide` 的参数位置完成到能力类型的转换
    let declarations = args
        .provides
        .iter()
        .map(|ty| quote! { #ty })
        .chain(
            args.startup
                .then(|| quote! { dyn ::kits_abstractions::Startup }),
        )
        .map(|ty| {
            quote! {
                let kit: ::std::sync::Arc<Self> = ::std::sync::Arc::clone(&self);
                capabilities.provide::<#ty>(kit);
            }
        });

    let kit_impl = quote! {
        impl #impl_generics ::kits_abstractions::Kit for #ident #ty_generics #where_clause {
            #name_fn

            #[allow(unused_variables)]
            fn provide(
                self: ::std::sync::Arc<Self>,
                capabilities: &mut ::kits_abstractions::Capabilities,
            ) {
                #( #declarations )*
            }
        }
    };

    let install = if args.install {
        generate_install_code(item)?
    } else {
        proc_macro2::TokenStream::new()
    };

    Ok(quote! {
        #item

        #kit_impl

        #install
    })
}

/// 生成组件自安装代码
fn generate_install_code(item: &ItemStruct) -> Result<proc_macro2::TokenStream> {
    if has_generics(&item.generics) {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "install 只支持没有泛型参数的结构体",
        ));
    }

    let ident = &item.ident;
    let installer = installer_ident(ident);

    Ok(quote! {
        // 使用 ctor 在程序启动时登记组件工厂
        #[::ctor::ctor]
        fn #installer() {
            ::kits_impl::install_kit(<#ident as ::core::default::Default>::default);
        }
    })
}

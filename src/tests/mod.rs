//! 单元测试模块
//! 覆盖样式序列化、脚本生成、组件渲染、注册表构建

pub mod component_tests;
